use anyhow::Result;
use dietplan::bootstrap::load_catalog;
use dietplan::config::Config;

pub fn catalog(config: Config) -> Result<()> {
    let catalog = load_catalog(&config.catalog)?;

    println!(
        "{:<28} {:<10} {:>7} {:>8} {:>6} {:>6}  {:<12} flags",
        "name", "category", "kcal", "protein", "carbs", "fats", "portion"
    );
    for item in catalog.iter() {
        println!(
            "{:<28} {:<10} {:>7.0} {:>8.1} {:>6.1} {:>6.1}  {:<12} {}",
            item.name,
            item.category.as_ref(),
            item.calories,
            item.protein,
            item.carbs,
            item.fats,
            item.portion,
            item.dietary_flags.join(",")
        );
    }

    Ok(())
}
