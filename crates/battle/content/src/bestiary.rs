//! The standard element/tier bestiary tables.

use battle_core::{Bestiary, Element, SkillSlot, SkillTemplate, UnitTier};

/// Damage scale of a basic enemy skill relative to its attack stat.
const BASIC_SCALE: f64 = 1.0;
/// Damage scale and cooldown of advanced enemy skills.
const ADVANCED_SCALE: f64 = 1.6;
const ADVANCED_COOLDOWN: u8 = 3;
/// Damage scale and cooldown of ultimate enemy skills.
const ULTIMATE_SCALE: f64 = 2.4;
const ULTIMATE_COOLDOWN: u8 = 5;

/// One element's name pools and skill names.
struct ElementTable {
    regular: &'static [&'static str],
    elite: &'static [&'static str],
    boss: &'static [&'static str],
    basic: &'static str,
    advanced: &'static str,
    ultimate: &'static str,
}

const FIRE: ElementTable = ElementTable {
    regular: &["Cinder Imp", "Ash Hound", "Flame Acolyte", "Magma Crawler"],
    elite: &["Pyre Warden", "Ember Knight", "Molten Colossus"],
    boss: &["Infernal Warlord", "Cinder Tyrant", "Heart of the Furnace"],
    basic: "Scorch",
    advanced: "Flame Lash",
    ultimate: "Pyroclasm",
};

const WATER: ElementTable = ElementTable {
    regular: &["Tide Sprite", "Brine Lurker", "Reef Stalker", "Drowned Sailor"],
    elite: &["Undertow Warden", "Abyssal Knight", "Maelstrom Caller"],
    boss: &["Leviathan Herald", "Tyrant of the Deep", "The Drowning King"],
    basic: "Tidal Strike",
    advanced: "Riptide",
    ultimate: "Crushing Depths",
};

const EARTH: ElementTable = ElementTable {
    regular: &["Pebble Golem", "Mud Creeper", "Tunnel Rat", "Shale Beast"],
    elite: &["Granite Warden", "Quake Bringer", "Bedrock Brute"],
    boss: &["Mountain Tyrant", "The Buried Colossus", "Worldshaker"],
    basic: "Rock Throw",
    advanced: "Fissure",
    ultimate: "Continental Crush",
};

const WIND: ElementTable = ElementTable {
    regular: &["Gale Wisp", "Storm Crow", "Dust Devil", "Zephyr Blade"],
    elite: &["Tempest Warden", "Cyclone Dancer", "Thunderhead"],
    boss: &["Hurricane Lord", "The Howling Sky", "Stormcaller Prime"],
    basic: "Gust",
    advanced: "Wind Shear",
    ultimate: "Eye of the Storm",
};

const ICE: ElementTable = ElementTable {
    regular: &["Frost Imp", "Snow Stalker", "Icicle Sprite", "Chillbone"],
    elite: &["Glacier Warden", "Rime Knight", "Permafrost Horror"],
    boss: &["The Frozen Monarch", "Avalanche Incarnate", "Winter's Maw"],
    basic: "Frostbite",
    advanced: "Ice Lance",
    ultimate: "Absolute Zero",
};

const NATURE: ElementTable = ElementTable {
    regular: &["Thorn Sprite", "Vine Crawler", "Spore Bat", "Bramble Hound"],
    elite: &["Grove Warden", "Venom Bloom", "Elder Treant"],
    boss: &["The Verdant Tyrant", "Rootlord", "Heart of the Wild"],
    basic: "Thorn Whip",
    advanced: "Toxic Spores",
    ultimate: "Overgrowth",
};

const SHADOW: ElementTable = ElementTable {
    regular: &["Gloom Wraith", "Night Creeper", "Dread Hound", "Umbral Imp"],
    elite: &["Void Warden", "Dusk Reaper", "Nightmare Weaver"],
    boss: &["The Hollow King", "Eclipse Tyrant", "Herald of the Abyss"],
    basic: "Shadow Claw",
    advanced: "Umbral Rend",
    ultimate: "Total Eclipse",
};

const ARCANE: ElementTable = ElementTable {
    regular: &["Mana Wisp", "Rune Crawler", "Spellbound Servitor", "Glyph Moth"],
    elite: &["Sigil Warden", "Aether Knight", "Chronomancer"],
    boss: &["The Unbound Archmage", "Paradox Engine", "Keeper of the Weave"],
    basic: "Arcane Bolt",
    advanced: "Rune Burst",
    ultimate: "Reality Fracture",
};

const NEUTRAL: ElementTable = ElementTable {
    regular: &["Cave Rat", "Bandit Scout", "Feral Hound", "Skeleton Grunt"],
    elite: &["Bandit Captain", "Ogre Bruiser", "Revenant Duelist"],
    boss: &["The Dungeon Warden", "Forgotten Champion", "Gatekeeper"],
    basic: "Strike",
    advanced: "Crushing Blow",
    ultimate: "Executioner's Wrath",
};

fn table(element: Element) -> &'static ElementTable {
    match element {
        Element::Fire => &FIRE,
        Element::Water => &WATER,
        Element::Earth => &EARTH,
        Element::Wind => &WIND,
        Element::Ice => &ICE,
        Element::Nature => &NATURE,
        Element::Shadow => &SHADOW,
        Element::Arcane => &ARCANE,
        Element::Neutral => &NEUTRAL,
    }
}

/// The built-in bestiary used by the dungeon-completion workflow.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardBestiary;

impl Bestiary for StandardBestiary {
    fn name_pool(&self, element: Element, tier: UnitTier) -> &[&str] {
        let table = table(element);
        match tier {
            UnitTier::Regular => table.regular,
            UnitTier::Elite => table.elite,
            UnitTier::StageBoss | UnitTier::FinalBoss => table.boss,
        }
    }

    fn skill_template(&self, element: Element, slot: SkillSlot) -> SkillTemplate {
        let table = table(element);
        match slot {
            SkillSlot::Basic => SkillTemplate {
                name: table.basic,
                damage_scale: BASIC_SCALE,
                cooldown: None,
            },
            SkillSlot::Advanced => SkillTemplate {
                name: table.advanced,
                damage_scale: ADVANCED_SCALE,
                cooldown: Some(ADVANCED_COOLDOWN),
            },
            SkillSlot::Ultimate => SkillTemplate {
                name: table.ultimate,
                damage_scale: ULTIMATE_SCALE,
                cooldown: Some(ULTIMATE_COOLDOWN),
            },
        }
    }
}
