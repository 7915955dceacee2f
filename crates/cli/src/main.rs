use anyhow::Result;
use clap::Parser;

use battle_content::StandardBestiary;
use battle_core::{
    AuraBonus, BattleEvent, BattleSkill, BattleUnit, DungeonRun, Element, SkillSet, UnitStats,
    generate_battle_log,
};

/// Simulate a dungeon run and print its battle log.
#[derive(Parser)]
#[command(version, about = "Generate a deterministic dungeon battle log")]
struct Cli {
    /// Run identifier; part of the RNG seed.
    #[arg(long, default_value_t = 1)]
    run_id: u64,
    /// Run creation time in unix milliseconds; part of the RNG seed.
    #[arg(long, default_value_t = 1_700_000_000_000)]
    created_at: u64,
    /// Dungeon difficulty level (1 or higher).
    #[arg(long, default_value_t = 5)]
    level: u32,
    /// Dungeon element; unknown values fall back to neutral.
    #[arg(long, default_value = "neutral")]
    element: String,
    /// Number of stages in the dungeon.
    #[arg(long, default_value_t = 3)]
    stages: u32,
    /// Number of demo party members.
    #[arg(long, default_value_t = 3)]
    allies: usize,
    /// Predetermined outcome of the run.
    #[arg(long)]
    success: bool,
    /// Render a human-readable transcript instead of JSON lines.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::try_init().ok();
    let cli = Cli::parse();

    let element = cli.element.parse::<Element>().unwrap_or_default();
    let run = DungeonRun {
        id: cli.run_id,
        created_at_ms: cli.created_at,
        dungeon_level: cli.level,
        element,
        total_stages: cli.stages,
        allies: demo_party(cli.allies),
    };

    let events = generate_battle_log(&run, cli.success, &StandardBestiary)?;

    if cli.pretty {
        for event in &events {
            println!("{}", describe(event));
        }
    } else {
        for event in &events {
            println!("{}", serde_json::to_string(event)?);
        }
    }
    Ok(())
}

/// A fixed demo roster; the first member carries a protective aura.
fn demo_party(count: usize) -> Vec<BattleUnit> {
    (0..count)
        .map(|index| {
            let stats = UnitStats {
                attack: 30,
                vitality: 50,
                speed: 12,
            };
            let skills = SkillSet {
                basic: BattleSkill::new("Slash", 30),
                advanced: Some(BattleSkill::new("Whirlwind", 48).with_cooldown(3)),
                ultimate: None,
            };
            let mut unit = BattleUnit::new(
                format!("char-{index}"),
                format!("Hero {index}"),
                stats,
                400,
                skills,
            );
            if index == 0 {
                unit = unit.with_aura(AuraBonus {
                    focus: 10,
                    defense: 15,
                    ..AuraBonus::default()
                });
            }
            unit
        })
        .collect()
}

fn describe(event: &BattleEvent) -> String {
    match event {
        BattleEvent::SystemMessage { message, .. } => format!("* {message}"),
        BattleEvent::BattleStart { allies, enemies, .. } => format!(
            "=== Battle begins: {} vs {} ===",
            roster(allies),
            roster(enemies)
        ),
        BattleEvent::Round {
            round,
            actions,
            living_allies,
            living_enemies,
            ..
        } => {
            let mut lines = vec![format!(
                "-- Round {round} ({living_allies} allies, {living_enemies} enemies standing)"
            )];
            for action in actions {
                let crit = if action.is_critical { " CRIT!" } else { "" };
                lines.push(format!(
                    "   {} hits {} with {} for {}{crit}",
                    action.actor, action.target, action.skill, action.damage
                ));
                if let Some(message) = &action.message {
                    lines.push(format!("     ({message})"));
                }
            }
            lines.join("\n")
        }
        BattleEvent::StageStart { stage, enemies, .. } => {
            format!("=== Stage {stage}: {} ===", roster(enemies))
        }
        BattleEvent::StageComplete { stage, allies, .. } => {
            format!("=== Stage {stage} cleared; {} still standing ===", allies.len())
        }
        BattleEvent::BattleEnd {
            reward_multiplier,
            summary,
            ..
        } => format!("=== {summary} (reward x{reward_multiplier:.2}) ==="),
    }
}

fn roster(units: &[BattleUnit]) -> String {
    units
        .iter()
        .map(|unit| unit.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
