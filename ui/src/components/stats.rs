//! Statistics cards for the home page

use leptos::prelude::*;

use crate::types::CatalogStats;

#[component]
pub fn StatsGrid(stats: CatalogStats) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-4">
            <StatCard title="Ocupações" value=stats.total_occupations subtitle="Total cadastradas" color="blue" />
            <StatCard title="Grandes Grupos" value=stats.total_big_groups subtitle="Categorias principais" color="green" />
            <StatCard title="Sub. Principais" value=stats.total_main_sub_groups subtitle="Subdivisões" color="purple" />
            <StatCard title="Subgrupos" value=stats.total_sub_groups subtitle="Especializações" color="orange" />
            <StatCard title="Famílias" value=stats.total_family subtitle="Níveis finais" color="indigo" />
        </div>
    }
}

#[component]
fn StatCard(
    title: &'static str,
    value: u64,
    subtitle: &'static str,
    color: &'static str,
) -> impl IntoView {
    let bg_class = match color {
        "blue" => "bg-blue-50 border-blue-200",
        "green" => "bg-green-50 border-green-200",
        "purple" => "bg-purple-50 border-purple-200",
        "orange" => "bg-orange-50 border-orange-200",
        "indigo" => "bg-indigo-50 border-indigo-200",
        _ => "bg-gray-50 border-gray-200",
    };
    let text_class = match color {
        "blue" => "text-blue-600",
        "green" => "text-green-600",
        "purple" => "text-purple-600",
        "orange" => "text-orange-600",
        "indigo" => "text-indigo-600",
        _ => "text-gray-600",
    };

    view! {
        <div class=format!("p-4 rounded-lg border-2 {} hover:shadow-md transition-shadow", bg_class)>
            <h3 class="font-bold text-gray-500 text-sm uppercase tracking-wide">{title}</h3>
            <p class=format!("text-3xl font-bold {}", text_class)>{value}</p>
            <p class="text-sm text-gray-500">{subtitle}</p>
        </div>
    }
}
