//! Command-line loot appraisal reports
//!
//! Two modes:
//! - `appraise` reads a stash dump (JSON array of items) and prints a
//!   verdict per item, skipping uniques and unidentified gear.
//! - `demo` rolls a seeded random stash and appraises it, useful for
//!   eyeballing the built-in thresholds without a real dump.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use appraise_core::prelude::*;
use clap::{Parser, Subcommand};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

#[derive(Parser)]
#[command(name = "appraise")]
#[command(about = "Classify looted gear by stat thresholds", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Appraise a stash dump
    Appraise {
        /// Path to a JSON file holding an array of items
        stash: PathBuf,

        /// TOML rule table to use instead of the built-in thresholds
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Print each item's accumulated stats under its verdict
        #[arg(short, long)]
        verbose: bool,
    },

    /// Appraise a randomly rolled stash
    Demo {
        /// RNG seed, same seed gives the same stash
        #[arg(short, long, default_value_t = 42)]
        seed: u64,

        /// Number of items to roll
        #[arg(short, long, default_value_t = 16)]
        count: usize,

        /// Print per-pattern match counts after the report
        #[arg(short, long)]
        tally: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Appraise {
            stash,
            rules,
            verbose,
        } => appraise_stash(&stash, rules.as_deref(), verbose),
        Commands::Demo { seed, count, tally } => run_demo(seed, count, tally),
    }
}

// === Appraise ===

fn appraise_stash(stash: &Path, rules: Option<&Path>, verbose: bool) -> Result<()> {
    let rules = match rules {
        Some(path) => load_ruleset(path)
            .with_context(|| format!("Failed to load rule table {}", path.display()))?,
        None => RuleSet::builtin(),
    };

    let content = fs::read_to_string(stash)
        .with_context(|| format!("Failed to read stash {}", stash.display()))?;
    let items: Vec<Item> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse stash {}", stash.display()))?;

    print_header();

    let mut kept = 0usize;
    let mut skipped = 0usize;
    for item in &items {
        if let Some(reason) = skip_reason(item) {
            skipped += 1;
            print_skip(item, reason);
            continue;
        }

        let stats = aggregate(item);
        let verdict = rules.classify(item.gear_type, &stats);
        print_row(item, verdict);
        if verdict.tier >= QualityTier::Low {
            kept += 1;
        }

        if verbose && !stats.is_empty() {
            let mut entries: Vec<(StatKind, f64)> = stats.iter().collect();
            entries.sort_by(|a, b| b.1.total_cmp(&a.1));
            for (stat, value) in entries {
                println!("    {:?} {}", stat, value);
            }
        }
    }

    println!();
    println!(
        "{} items, {} worth a second look, {} skipped",
        items.len(),
        kept,
        skipped
    );
    Ok(())
}

// === Demo ===

fn run_demo(seed: u64, count: usize, tally: bool) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let items: Vec<Item> = (0..count).map(|i| roll_item(&mut rng, i)).collect();

    let rules = RuleSet::builtin();
    let mut counter = MatchCounter::new();

    println!("Rolled {} items from seed {}", count, seed);
    println!();
    print_header();

    for item in &items {
        if let Some(reason) = skip_reason(item) {
            print_skip(item, reason);
            continue;
        }

        let stats = aggregate_with(item, &mut counter);
        let verdict = rules.classify(item.gear_type, &stats);
        print_row(item, verdict);
    }

    if tally {
        println!();
        println!("Pattern hits ({} total):", counter.total());
        for (rule, hits) in counter.entries() {
            if hits > 0 {
                println!("{:>5}  {}", hits, rule.pattern());
            }
        }
    }

    Ok(())
}

const DEMO_BASES: &[(&str, GearType)] = &[
    ("Vaal Regalia", GearType::Chest),
    ("Hubris Circlet", GearType::Helmet),
    ("Sorcerer Boots", GearType::Boots),
    ("Titan Gauntlets", GearType::Gloves),
    ("Titanium Spirit Shield", GearType::Shield),
    ("Leather Belt", GearType::Belt),
    ("Two-Stone Ring", GearType::Ring),
    ("Onyx Amulet", GearType::Amulet),
    ("Spike-Point Quiver", GearType::Quiver),
    ("Vaal Axe", GearType::Axe),
    ("Harbinger Bow", GearType::Bow),
    ("Imbued Wand", GearType::Wand),
    ("Opal Sceptre", GearType::Sceptre),
    ("Cobalt Jewel", GearType::Jewel),
];

fn roll_item(rng: &mut ChaCha8Rng, index: usize) -> Item {
    let (base, gear_type) = *DEMO_BASES.choose(rng).unwrap();
    let rarity = match rng.gen_range(0..20) {
        0 => Rarity::Unique,
        1..=7 => Rarity::Magic,
        _ => Rarity::Rare,
    };

    let mut item = Item::new(format!("{} #{}", base, index + 1), gear_type, rarity);
    let mod_count = match rarity {
        Rarity::Rare => rng.gen_range(3..=6),
        _ => rng.gen_range(1..=2),
    };
    for _ in 0..mod_count {
        item.explicit_mods.push(roll_mod(rng, gear_type));
    }

    // A fraction of drops arrive unidentified
    if rng.gen_bool(0.1) {
        item.explicit_mods.clear();
    }

    item
}

fn roll_mod(rng: &mut ChaCha8Rng, gear_type: GearType) -> String {
    let is_weapon = matches!(
        gear_type,
        GearType::Sword
            | GearType::Axe
            | GearType::Mace
            | GearType::Bow
            | GearType::Dagger
            | GearType::Wand
            | GearType::Sceptre
            | GearType::Staff
    );

    if is_weapon {
        match rng.gen_range(0..8) {
            0 => format!("{}% increased Physical Damage", rng.gen_range(40..=160)),
            1 => {
                let low = rng.gen_range(2..=12);
                let high = low + rng.gen_range(4..=28);
                format!("Adds {} to {} Physical Damage", low, high)
            }
            2 => format!("{}% increased Attack Speed", rng.gen_range(5..=26)),
            3 => format!("{}% increased Spell Damage", rng.gen_range(20..=95)),
            4 => format!(
                "{}% increased Critical Strike Chance for Spells",
                rng.gen_range(30..=110)
            ),
            5 => format!("+{} to Level of Socketed Fire Gems", rng.gen_range(1..=2)),
            6 => {
                let low = rng.gen_range(10..=40);
                let high = low + rng.gen_range(10..=60);
                format!("Adds {} to {} Lightning Damage to Spells", low, high)
            }
            _ => "Hits can't be Evaded".to_string(),
        }
    } else {
        match rng.gen_range(0..10) {
            0 => format!("+{} to maximum Life", rng.gen_range(20..=110)),
            1 => format!("+{} to maximum Energy Shield", rng.gen_range(30..=120)),
            2 => format!("+{}% to Fire Resistance", rng.gen_range(10..=48)),
            3 => format!("+{}% to Cold Resistance", rng.gen_range(10..=48)),
            4 => format!("+{}% to Lightning Resistance", rng.gen_range(10..=48)),
            5 => format!("+{} to Strength", rng.gen_range(10..=50)),
            6 => format!("+{} to Intelligence", rng.gen_range(10..=50)),
            7 => format!("+{} to All Attributes", rng.gen_range(6..=30)),
            8 => format!("{}% increased Movement Speed", rng.gen_range(10..=30)),
            _ => "Has 1 Abyssal Socket".to_string(),
        }
    }
}

// === Report formatting ===

fn skip_reason(item: &Item) -> Option<&'static str> {
    if item.rarity == Rarity::Unique {
        Some("unique")
    } else if item.is_unidentified() {
        Some("unidentified")
    } else {
        None
    }
}

fn print_header() {
    println!(
        "{:<30} {:<8} {:<7} {:<10} {:>6}",
        "Item", "Slot", "Rarity", "Verdict", "Score"
    );
    println!("{}", "-".repeat(65));
}

fn print_row(item: &Item, verdict: Classification) {
    println!(
        "{:<30} {:<8} {:<7} {:<10} {:>6.2}",
        item.name,
        item.gear_type.as_str(),
        item.rarity.as_str(),
        verdict.tier.as_str(),
        verdict.score
    );
}

fn print_skip(item: &Item, reason: &str) {
    println!(
        "{:<30} {:<8} {:<7} skipped ({})",
        item.name,
        item.gear_type.as_str(),
        item.rarity.as_str(),
        reason
    );
}
