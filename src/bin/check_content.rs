// Content verification
//
// Checks catalog integrity and message coverage without starting a server.
// Usage: cargo run --bin check_content [-- --strict]
//
// Exit code 1 on integrity issues or missing default-locale messages.
// With --strict, locale fallbacks and orphan keys fail too.

use hc1_site::i18n::required_paths;
use hc1_site::{Catalog, Locale, Translator};

fn main() -> anyhow::Result<()> {
    let strict = std::env::args().any(|arg| arg == "--strict");

    println!("======================================================================");
    println!("HC-1 content check{}", if strict { " (strict)" } else { "" });
    println!("======================================================================");

    let catalog = Catalog::builtin()?;
    let translator = Translator::builtin()?;

    println!(
        "\nCatalog: {} sectors, {} capabilities, {} insights",
        catalog.all_sectors().len(),
        catalog.all_capabilities().len(),
        catalog.insights().len()
    );

    let mut failed = false;

    // 1. Relations between catalog entries
    let issues = catalog.integrity_issues();
    if issues.is_empty() {
        println!("✓ Catalog relations resolve");
    } else {
        failed = true;
        println!("✗ {} catalog integrity issue(s):", issues.len());
        for issue in &issues {
            println!("    - {}", issue);
        }
    }

    // 2. Every message a page needs exists in the default locale
    let required = required_paths(&catalog);
    let missing = translator.missing_required(&required);
    if missing.is_empty() {
        println!("✓ {} required messages present in '{}'", required.len(), Locale::DEFAULT);
    } else {
        failed = true;
        println!("✗ {} required message(s) missing from '{}':", missing.len(), Locale::DEFAULT);
        for path in &missing {
            println!("    - {}", path);
        }
    }

    // 3. Translation coverage of the other locales
    println!("\nCoverage:");
    let report = translator.coverage();
    for coverage in &report.locales {
        println!(
            "  {} {:>6.1}%  ({}/{} translated, {} orphan)",
            coverage.locale,
            coverage.percent(),
            coverage.translated,
            coverage.total,
            coverage.orphans.len()
        );
        for path in &coverage.fallbacks {
            println!("      falls back: {}", path);
        }
        for path in &coverage.orphans {
            println!("      orphan: {}", path);
        }
    }
    if strict && !report.is_complete() {
        failed = true;
        println!("✗ Coverage incomplete");
    }

    if failed {
        println!("\n✗ CONTENT CHECK FAILED");
        std::process::exit(1);
    }

    println!("\n✓ CONTENT CHECK PASSED");
    Ok(())
}
