use std::process::ExitCode;

use unicode_registry::{build, RegistryStats, UcdConfig};

mod logger;

fn main() -> ExitCode
{
    logger::init();

    // каталог UCD обязателен, значения по умолчанию нет
    let dir = match std::env::args_os().nth(1) {
        Some(dir) => dir,
        None => {
            eprintln!("использование: unicode_registry <каталог UCD>");
            return ExitCode::from(2);
        }
    };

    let registry = match build(&UcdConfig::new(dir)) {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let stats = RegistryStats::collect(&registry);

    println!(
        "кодпоинтов: {}, последний: U+{:04X}",
        stats.total,
        registry.max_code().unwrap_or(0)
    );
    println!("канонических декомпозиций: {}", stats.canonical_decompositions);
    println!("декомпозиций совместимости: {}", stats.compat_decompositions);
    println!("исключений композиции: {}", stats.exclusions);
    println!("пар композиции: {}", stats.compositions);
    println!();

    for (category, entry) in stats.categories.ordered() {
        println!("{}. {} ({})", entry.order, category, entry.count);
    }

    println!();

    for (block, entry) in stats.blocks.ordered() {
        println!("{}. {} ({})", entry.order, block, entry.count);
    }

    ExitCode::SUCCESS
}
