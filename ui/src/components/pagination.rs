//! Windowed pagination for search results

use leptos::prelude::*;

/// Entry in a windowed page list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Compute the visible window of page numbers around `page`, clamped to the
/// end of the range, with the first and last pages pinned behind ellipses
/// when the window is clipped.
pub fn page_window(page: u32, total_pages: u32, max_visible: u32) -> Vec<PageItem> {
    if total_pages == 0 {
        return Vec::new();
    }

    let mut start = page.saturating_sub(max_visible / 2).max(1);
    let mut end = if start + max_visible - 1 > total_pages {
        total_pages
    } else {
        start + max_visible - 1
    };

    if page >= total_pages {
        end = total_pages;
        start = end.saturating_sub(max_visible - 1).max(1);
    }

    let mut items = Vec::new();
    if start > 1 {
        items.push(PageItem::Page(1));
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }
    for number in start..=end {
        items.push(PageItem::Page(number));
    }
    if end < total_pages {
        if end < total_pages - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(total_pages));
    }
    items
}

#[component]
pub fn Paginator(
    page: u32,
    total_pages: u32,
    #[prop(into)] on_page: Callback<u32>,
) -> impl IntoView {
    let items = page_window(page, total_pages, 10);

    view! {
        <nav class="flex items-center justify-center gap-1" aria-label="Paginação">
            {(page > 1)
                .then(|| {
                    view! {
                        <button
                            class="px-3 py-2 text-sm rounded-lg hover:bg-gray-100"
                            aria-label="Primeira página"
                            on:click=move |_| on_page.run(1)
                        >
                            "«"
                        </button>
                        <button
                            class="px-3 py-2 text-sm rounded-lg hover:bg-gray-100"
                            aria-label="Página anterior"
                            on:click=move |_| on_page.run(page - 1)
                        >
                            "Anterior"
                        </button>
                    }
                })}
            {items
                .into_iter()
                .map(|item| match item {
                    PageItem::Ellipsis => view! {
                        <span class="px-3 py-2 text-sm text-gray-400">"…"</span>
                    }
                        .into_any(),
                    PageItem::Page(number) => {
                        let active = number == page;
                        view! {
                            <button
                                class=format!(
                                    "px-3 py-2 text-sm rounded-lg {}",
                                    if active {
                                        "bg-blue-600 text-white"
                                    } else {
                                        "hover:bg-gray-100"
                                    }
                                )
                                on:click=move |_| on_page.run(number)
                            >
                                {number}
                            </button>
                        }
                            .into_any()
                    }
                })
                .collect_view()}
            {(page < total_pages)
                .then(|| {
                    view! {
                        <button
                            class="px-3 py-2 text-sm rounded-lg hover:bg-gray-100"
                            aria-label="Próxima página"
                            on:click=move |_| on_page.run(page + 1)
                        >
                            "Próxima"
                        </button>
                        <button
                            class="px-3 py-2 text-sm rounded-lg hover:bg-gray-100"
                            aria-label="Última página"
                            on:click=move |_| on_page.run(total_pages)
                        >
                            "»"
                        </button>
                    }
                })}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(items: &[PageItem]) -> Vec<Option<u32>> {
        items
            .iter()
            .map(|item| match item {
                PageItem::Page(n) => Some(*n),
                PageItem::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn test_small_range_has_no_ellipsis() {
        let window = page_window(2, 3, 10);
        assert_eq!(pages(&window), vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_window_at_start() {
        let window = page_window(1, 50, 10);
        let items = pages(&window);
        assert_eq!(items.first(), Some(&Some(1)));
        // Trailing ellipsis then last page.
        assert_eq!(items[items.len() - 2], None);
        assert_eq!(items.last(), Some(&Some(50)));
    }

    #[test]
    fn test_window_in_middle_pins_both_ends() {
        let window = page_window(25, 50, 10);
        let items = pages(&window);
        assert_eq!(items[0], Some(1));
        assert_eq!(items[1], None);
        assert!(items.contains(&Some(25)));
        assert_eq!(items[items.len() - 2], None);
        assert_eq!(items.last(), Some(&Some(50)));
    }

    #[test]
    fn test_window_at_end_is_clamped() {
        let window = page_window(50, 50, 10);
        let items = pages(&window);
        assert_eq!(items.last(), Some(&Some(50)));
        assert_eq!(items[0], Some(1));
        assert_eq!(items[1], None);
        // The window itself covers the last ten pages.
        assert!(items.contains(&Some(41)));
    }

    #[test]
    fn test_empty_when_no_pages() {
        assert!(page_window(1, 0, 10).is_empty());
    }
}
