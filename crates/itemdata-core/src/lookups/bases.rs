//! Base-type tables: slot groups, weapon families, two-handed and
//! class-restricted bases.

/// Base type -> slot group. Keys are matched case-insensitively.
pub const BASE_SLOT_GROUPS: &[(&str, &str)] = &[
    ("2-Handed Sword", "Weapon"),
    ("Aerin Shield", "Offhand"),
    ("Alpha Helm", "Helm"),
    ("Amulet", "Amulet"),
    ("Ancient Axe", "Weapon"),
    ("Ancient Shield", "Offhand"),
    ("Ancient Sword", "Weapon"),
    ("AncientArmor", "Armor"),
    ("Arbalest", "Weapon"),
    ("Archon Plate", "Armor"),
    ("Axe", "Weapon"),
    ("Balista", "Weapon"),
    ("Balrog Skin", "Armor"),
    ("Barbed Club", "Weapon"),
    ("Barbed Shield", "Offhand"),
    ("Bardiche", "Weapon"),
    ("Basinet", "Helm"),
    ("Bastard Sword", "Weapon"),
    ("Battle Axe", "Weapon"),
    ("Battle Belt", "Belt"),
    ("Battle Boots", "Boots"),
    ("Battle Guantlets", "Gloves"),
    ("Battle Hammer", "Weapon"),
    ("Battle Scythe", "Weapon"),
    ("Battle Staff", "Weapon"),
    ("Battle Sword", "Weapon"),
    ("Bearded Axe", "Weapon"),
    ("Bec-de-Corbin", "Weapon"),
    ("Belt", "Belt"),
    ("Bill", "Weapon"),
    ("Blade", "Weapon"),
    ("Bone Helm", "Helm"),
    ("Bone Knife", "Weapon"),
    ("Bone Shield", "Offhand"),
    ("Bone Wand", "Weapon"),
    ("Boneweave", "Armor"),
    ("Bracers", "Gloves"),
    ("Bramble Mitts", "Gloves"),
    ("Brandistock", "Weapon"),
    ("Breast Plate", "Armor"),
    ("Broad Axe", "Weapon"),
    ("Broad Sword", "Weapon"),
    ("Buckler", "Offhand"),
    ("Burnt Wand", "Weapon"),
    ("Cap", "Helm"),
    ("Casque", "Helm"),
    ("Cedar Staff", "Weapon"),
    ("CedarBow", "Weapon"),
    ("Ceremonial Bow", "Weapon"),
    ("Ceremonial Javelin", "Weapon"),
    ("Ceremonial Pike", "Weapon"),
    ("Chain Boots", "Boots"),
    ("Chain Mail", "Armor"),
    ("Champion Axe", "Weapon"),
    ("Champion Sword", "Weapon"),
    ("Chaos Armor", "Armor"),
    ("Chu-Ko-Nu", "Weapon"),
    ("Cinquedeas", "Weapon"),
    ("Claymore", "Weapon"),
    ("Cleaver", "Weapon"),
    ("Club", "Weapon"),
    ("Colossal Sword", "Weapon"),
    ("Colossus Blade", "Weapon"),
    ("Colossus Girdle", "Weapon"),
    ("Composite Bow", "Weapon"),
    ("Conquest Sword", "Weapon"),
    ("Crossbow", "Weapon"),
    ("Crowbill", "Weapon"),
    ("Crown", "Helm"),
    ("Crusader Bow", "Weapon"),
    ("Crusader Guantlets", "Gloves"),
    ("Crystal Sword", "Weapon"),
    ("Crystalline Globe", "Weapon"),
    ("Cudgel", "Weapon"),
    ("Cuirass", "Armor"),
    ("Cutlass", "Weapon"),
    ("Dacian Falx", "Weapon"),
    ("Dagger", "Weapon"),
    ("Death Mask", "Helm"),
    ("Decapitator", "Weapon"),
    ("Defender", "Offhand"),
    ("Demonhide Armor", "Armor"),
    ("Demonhide Boots", "Boots"),
    ("Demonhide Gloves", "Gloves"),
    ("Demonhide Sash", "Belt"),
    ("Devil Star", "Weapon"),
    ("Diamond Mail", "Armor"),
    ("Dimensional Blade", "Weapon"),
    ("Dirk", "Weapon"),
    ("Divine Scepter", "Weapon"),
    ("Double Axe", "Weapon"),
    ("Double Bow", "Weapon"),
    ("Dragon Shield", "Offhand"),
    ("Dream Spirit", "Helm"),
    ("Edge Bow", "Weapon"),
    ("Embossed Plate", "Armor"),
    ("Espadon", "Weapon"),
    ("Executioner Sword", "Weapon"),
    ("Falchion", "Weapon"),
    ("Field Plate", "Armor"),
    ("Flail", "Weapon"),
    ("Flamberge", "Weapon"),
    ("Flanged Mace", "Weapon"),
    ("Francisca", "Weapon"),
    ("Full Helm", "Helm"),
    ("Full Plate Mail", "Armor"),
    ("Fuscina", "Weapon"),
    ("Gauntlets", "Gloves"),
    ("Ghost Armor", "Armor"),
    ("Ghost Spear", "Weapon"),
    ("Giant Axe", "Weapon"),
    ("Giant Conch", "Helm"),
    ("Giant Sword", "Weapon"),
    ("Giant Thresher", "Weapon"),
    ("Girdle", "Belt"),
    ("Gladius", "Weapon"),
    ("Gloves", "Gloves"),
    ("Glowing Orb", "Weapon"),
    ("Gnarled Staff", "Weapon"),
    ("Gothic Axe", "Weapon"),
    ("Gothic Bow", "Weapon"),
    ("Gothic Plate", "Armor"),
    ("Gothic Shield", "Offhand"),
    ("Gothic Staff", "Weapon"),
    ("Gothic Sword", "Weapon"),
    ("Grand Crown", "Helm"),
    ("Grand Matron Bow", "Weapon"),
    ("Grand Scepter", "Weapon"),
    ("Grave Wand", "Weapon"),
    ("Great Axe", "Weapon"),
    ("Great Helm", "Helm"),
    ("Great Maul", "Weapon"),
    ("Great Sword", "Weapon"),
    ("Grim Helm", "Helm"),
    ("Grim Scythe", "Weapon"),
    ("Grim Shield", "Offhand"),
    ("Grim Wand", "Weapon"),
    ("Guardian Crown", "Helm"),
    ("Halberd", "Weapon"),
    ("Hammer", "Weapon"),
    ("Hand Axe", "Weapon"),
    ("Hard Leather", "Armor"),
    ("Hatchet", "Weapon"),
    ("Hawk Helm", "Helm"),
    ("Heavy Belt", "Belt"),
    ("Heavy Boots", "Boots"),
    ("Heavy Bracers", "Gloves"),
    ("Heavy Crossbow", "Weapon"),
    ("Heavy Gloves", "Gloves"),
    ("Heirophant Trophy", "Offhand"),
    ("Hellspawn Skull", "Offhand"),
    ("Minion Skull", "Offhand"),
    ("Helm", "Helm"),
    ("Heraldic Shield", "Offhand"),
    ("Highland Blade", "Weapon"),
    ("Holy Water Sprinkler", "Weapon"),
    ("Hunter's Bow", "Weapon"),
    ("Hydra Bow", "Weapon"),
    ("Hyperion", "Offhand"),
    ("Jagged Star", "Weapon"),
    ("Jawbone Visor", "Helm"),
    ("Jo Stalf", "Weapon"),
    ("Kite Shield", "Offhand"),
    ("Knout", "Weapon"),
    ("Kris", "Weapon"),
    ("Lacquered Plate", "Armor"),
    ("Lance", "Weapon"),
    ("Large Axe", "Weapon"),
    ("Large Shield", "Offhand"),
    ("Leather Armor", "Armor"),
    ("Leather Boots", "Boots"),
    ("Legendary Mallet", "Weapon"),
    ("Light Belt", "Belt"),
    ("Light Crossbow", "Weapon"),
    ("Light Gauntlets", "Gloves"),
    ("Light Plate", "Armor"),
    ("Light Plate Boots", "Boots"),
    ("Linked Mail", "Armor"),
    ("Lion Helm", "Helm"),
    ("Lochaber Axe", "Weapon"),
    ("Long Battle Bow", "Weapon"),
    ("Long Bow", "Weapon"),
    ("Long Siege Bow", "Weapon"),
    ("Long Staff", "Weapon"),
    ("Long Sword", "Weapon"),
    ("Long War Bow", "Weapon"),
    ("Luna", "Offhand"),
    ("Mace", "Weapon"),
    ("Mage Plate", "Armor"),
    ("Maiden Javelin", "Weapon"),
    ("Martel de Fer", "Weapon"),
    ("Mask", "Helm"),
    ("Matriarchal Pike", "Weapon"),
    ("Maul", "Weapon"),
    ("Mesh Armor", "Armor"),
    ("Mesh Belt", "Belt"),
    ("Mesh Boots", "Boots"),
    ("Military Axe", "Weapon"),
    ("Military Pick", "Weapon"),
    ("Mithral Point", "Weapon"),
    ("Monarch", "Offhand"),
    ("Morning Star", "Weapon"),
    ("Mummified Trophy", "Offhand"),
    ("Naga", "Weapon"),
    ("Ornate Armor", "Armor"),
    ("Overseer Skull", "Offhand"),
    ("Partizan", "Weapon"),
    ("Pavise", "Offhand"),
    ("Petrified Wand", "Weapon"),
    ("Phase Blade", "Weapon"),
    ("Pike", "Weapon"),
    ("Plate Boots", "Boots"),
    ("Plate Mail", "Armor"),
    ("Poignard", "Weapon"),
    ("Poleaxe", "Weapon"),
    ("Quarterstaff", "Weapon"),
    ("Quhab", "Weapon"),
    ("Quilted Armor", "Armor"),
    ("Razor Bow", "Weapon"),
    ("Repeating Crossbow", "Weapon"),
    ("Ring", "Ring1"),
    ("Ring Mail", "Armor"),
    ("Rondel", "Weapon"),
    ("Round Shield", "Offhand"),
    ("Rune Bow", "Weapon"),
    ("Rune Scepter", "Weapon"),
    ("Rune Staff", "Weapon"),
    ("Rune Sword", "Weapon"),
    ("Runic Talons", "Weapon"),
    ("Greater Talons", "Weapon"),
    ("Russet Armor", "Armor"),
    ("Saber", "Weapon"),
    ("Sallet", "Helm"),
    ("Sash", "Belt"),
    ("Scale Mail", "Armor"),
    ("Scepter", "Weapon"),
    ("Scimitar", "Weapon"),
    ("Scissors Suwayyah", "Weapon"),
    ("Scutum", "Offhand"),
    ("Scythe", "Weapon"),
    ("Seraph Rod", "Weapon"),
    ("SerpentSkin Armor", "Armor"),
    ("Shako", "Helm"),
    ("Shamshir", "Weapon"),
    ("Sharkskin Belt", "Belt"),
    ("Sharkskin Boots", "Boots"),
    ("Sharkskin Gloves", "Gloves"),
    ("Sharktooth Armor", "Armor"),
    ("Shillelah", "Weapon"),
    ("Short Battle Bow", "Weapon"),
    ("Short Bow", "Weapon"),
    ("Short Siege Bow", "Weapon"),
    ("Short Staff", "Weapon"),
    ("Short Sword", "Weapon"),
    ("Short War Bow", "Weapon"),
    ("Siege Crossbow", "Weapon"),
    ("Skull Cap", "Helm"),
    ("Slayer Guard", "Helm"),
    ("Small Shield", "Offhand"),
    ("Spear", "Weapon"),
    ("Spetum", "Weapon"),
    ("Spiked Club", "Weapon"),
    ("Spiked Shield", "Offhand"),
    ("Spired Helm", "Helm"),
    ("Splint Mail", "Armor"),
    ("Staff", "Weapon"),
    ("Stilleto", "Weapon"),
    ("Studded Leather", "Armor"),
    ("Sun Spirit", "Helm"),
    ("Swirling Crystal", "Weapon"),
    ("Tabar", "Weapon"),
    ("Templar Coat", "Armor"),
    ("Thunder Maul", "Weapon"),
    ("Tigulated Mail", "Armor"),
    ("Tomb Wand", "Weapon"),
    ("Tower Shield", "Offhand"),
    ("Tresllised Armor", "Armor"),
    ("Trident", "Weapon"),
    ("Troll Belt", "Belt"),
    ("Tulwar", "Weapon"),
    ("Tusk Sword", "Weapon"),
    ("Twin Axe", "Weapon"),
    ("Voulge", "Weapon"),
    ("Wand", "Weapon"),
    ("War Axe", "Weapon"),
    ("War Belt", "Belt"),
    ("War Boots", "Boots"),
    ("War Club", "Weapon"),
    ("War Fork", "Weapon"),
    ("War Gauntlets", "Gloves"),
    ("War Hammer", "Weapon"),
    ("War Hat", "Helm"),
    ("War Scepter", "Weapon"),
    ("War Scythe", "Weapon"),
    ("War Spear", "Weapon"),
    ("War Staff", "Weapon"),
    ("War Sword", "Weapon"),
    ("Winged Helm", "Helm"),
    ("Wire Fleece", "Armor"),
    ("Yari", "Weapon"),
    ("Yew Wand", "Weapon"),
    ("Zweihander", "Weapon"),
    ("aegis", "Offhand"),
    ("amulet", "Amulet"),
    ("archon staff", "Weapon"),
    ("armet", "Helm"),
    ("ataghan", "Weapon"),
    ("balrog blade", "Weapon"),
    ("balrog spear", "Weapon"),
    ("battle cestus", "Weapon"),
    ("battle dart", "Weapon"),
    ("berserker axe", "Weapon"),
    ("blade barrier", "Offhand"),
    ("blood spirit", "Helm"),
    ("bloodlord skull", "Offhand"),
    ("bone visage", "Helm"),
    ("boneweave boots", "Boots"),
    ("caduceus", "Weapon"),
    ("colossus crossbow", "Weapon"),
    ("conqueror crown", "Helm"),
    ("corona", "Helm"),
    ("cryptic axe", "Weapon"),
    ("cryptic sword", "Weapon"),
    ("demon crossbow", "Weapon"),
    ("demonhead", "Helm"),
    ("destroyer helm", "Helm"),
    ("diadem", "Helm"),
    ("dimensional shard", "Weapon"),
    ("dusk shroud", "Armor"),
    ("earth spirit", "Helm"),
    ("elder staff", "Weapon"),
    ("eldritch orb", "Weapon"),
    ("elegant blade", "Weapon"),
    ("ettin axe", "Weapon"),
    ("fanged knife", "Weapon"),
    ("feral claws", "Weapon"),
    ("flying axe", "Weapon"),
    ("fury visor", "Helm"),
    ("ghost glaive", "Weapon"),
    ("glorious axe", "Weapon"),
    ("hurlbat", "Weapon"),
    ("hyperion spear", "Weapon"),
    ("kraken shell", "Armor"),
    ("legend spike", "Weapon"),
    ("legendary mallet", "Weapon"),
    ("lich wand", "Weapon"),
    ("matriarchal bow", "Weapon"),
    ("matriarchal javelin", "Weapon"),
    ("matriarchal spear", "Weapon"),
    ("mighty scepter", "Weapon"),
    ("mirrored boots", "Boots"),
    ("mithril coil", "Belt"),
    ("myrmidon greaves", "Boots"),
    ("ogre axe", "Weapon"),
    ("ogre gauntlets", "Gloves"),
    ("ogre maul", "Weapon"),
    ("phase blade", "Weapon"),
    ("ring", "Ring1"),
    ("sacred armor", "Armor"),
    ("sacred rondache", "Offhand"),
    ("scarabshell boots", "Boots"),
    ("scourge", "Weapon"),
    ("shadow plate", "Armor"),
    ("silver-edged axe", "Weapon"),
    ("sky spirit", "Helm"),
    ("spiderweb sash", "Belt"),
    ("spired helm", "Helm"),
    ("succubae skull", "Offhand"),
    ("thresher", "Weapon"),
    ("thunder maul", "Weapon"),
    ("tiara", "Helm"),
    ("tomahawk", "Weapon"),
    ("troll nest", "Offhand"),
    ("truncheon", "Weapon"),
    ("tyrant club", "Weapon"),
    ("unearthed wand", "Weapon"),
    ("vambraces", "Gloves"),
    ("vampirebone gloves", "Gloves"),
    ("vampirefang belt", "Belt"),
    ("vortex shield", "Offhand"),
    ("war fist", "Weapon"),
    ("war fork", "Weapon"),
    ("war pike", "Weapon"),
    ("war spike", "Weapon"),
    ("ward bow", "Weapon"),
    ("winged axe", "Weapon"),
    ("winged harpoon", "Weapon"),
    ("winged knife", "Weapon"),
    ("wrist sword", "Weapon"),
    ("wyrrnhide boots", "Boots"),
    ("zakarum shield", "Offhand"),
    ("Chain Gloves", "Gloves"),
    ("Lacerator", "Weapon"),
    ("ward", "Offhand"),
    ("colossus girdle", "Belt"),
    ("greaves", "Boots"),
    ("Sabre", "Weapon"),
    ("Loricated Mail", "Armor"),
    ("Hellforge Plate", "Armor"),
    ("Reinforced Mace", "Weapon"),
    ("Cantor Trophy", "Offhand"),
    ("Circlet", "Helm"),
    ("Hunter's Guise", "Helm"),
    ("Avenger Guard", "Helm"),
    ("Arrows", "Offhand"),
    ("Bolts", "Offhand"),
    ("Gargoyle Head", "Offhand"),
    ("Rondache", "Offhand"),
    ("Spirit Mask", "Helm"),
    ("Blade Bow", "Weapon"),
    ("Sharp Arrows", "Offhand"),
];

/// Bases counted as two-handed. Swords usable either way count as two-handed.
pub const TWO_HANDED_BASES: &[&str] = &[
    "Bardiche", "Voulge", "Scythe", "Poleaxe", "Halberd", "War Scythe", "Lochaber Axe", "Bill",
    "Battle Scythe", "Partizan", "Bec-de-Corbin", "Grim Scythe", "Ogre Axe", "Colossus Voulge",
    "Thresher", "Cryptic Axe", "Great Poleaxe", "Giant Thresher", "Spear", "Trident",
    "Brandistock", "Spetum", "Pike", "War Spear", "Fuscina", "War Fork", "Yari", "Lance",
    "Hyperion Spear", "Stygian Pike", "Mancatcher", "Ghost Spear", "War Pike", "Maiden Spear",
    "Maiden Pike", "Ceremonial Spear", "Ceremonial Pike", "Matriarchal Spear",
    "Matriarchal Pike", "Short Staff", "Long Staff", "Gnarled Staff", "Battle Staff",
    "War Staff", "Jo Staff", "Quarterstaff", "Cedar Staff", "Gothic Staff", "Rune Staff",
    "Elder Staff", "Shillelagh", "Archon Staff", "Short Bow", "Hunter's Bow", "Long Bow",
    "Composite Bow", "Short Battle Bow", "Long Battle Bow", "Short War Bow", "Long War Bow",
    "Edge Bow", "Razor Bow", "Cedar Bow", "Double Bow", "Short Siege Bow", "Long Siege Bow",
    "Rune Bow", "Gothic Bow", "Spider Bow", "Blade Bow", "Shadow Bow", "Great Bow",
    "Diamond Bow", "Crusader Bow", "Ward Bow", "Hydra Bow", "Stag Bow", "Reflex Bow",
    "Ashwood Bow", "Matriarchal Bow", "Grand Matron Bow", "Light Crossbow", "Crossbow",
    "Heavy Crossbow", "Arbalest", "Siege Crossbow", "Ballista", "Chu-Ko-Nu", "Demon Crossbow",
    "Colossus Crossbow", "Large Axe", "Broad Axe", "Battle Axe", "Great Axe", "Giant Axe",
    "Military Axe", "Bearded Axe", "Tabar", "Gothic Axe", "Ancient Axe", "Feral Axe",
    "Silver-Edged Axe", "Decapitator", "Champion Axe", "Glorious Axe", "Maul", "Great Maul",
    "War Club", "Martel de Fer", "Ogre Maul", "Thunder Maul", "Two-Handed Sword", "Claymore",
    "Giant Sword", "Bastard Sword", "Flamberge", "Great Sword", "Espandon", "Dacian Falx",
    "Tusk Sword", "Gothic Sword", "Zweihander", "Executioner Sword", "Legend Sword",
    "Highland Blade", "Balrog Blade", "Champion Sword", "Colossus Sword", "Colossus Blade",
];

pub const JAVELIN_BASES: &[&str] = &[
    "Javelin", "Pilum", "Short Spear", "Glaive", "Throwing Spear", "War Javelin", "Great Pilum",
    "Harpoon", "Simbilan", "Spiculum", "Hyperion Javelin", "Stygian Pilum", "Winged Harpoon",
    "Ghost Glaive", "Balrog Spear", "Maiden Javelin", "Ceremonial Javelin",
    "Matriarchal Javelin",
];

pub const SPEAR_BASES: &[&str] = &[
    "Spear", "Trident", "Brandistock", "Spetum", "Pike", "War Spear", "Fuscina", "War Fork",
    "Yari", "Lance", "Hyperion Spear", "Stygian Pike", "Mancatcher", "Ghost Spear", "War Pike",
    "Maiden Spear", "Maiden Pike", "Ceremonial Spear", "Ceremonial Pike", "Matriarchal Spear",
    "Matriarchal Pike",
];

pub const CLAW_BASES: &[&str] = &[
    "Katar", "Wrist Blade", "Cestus", "Claws", "Blade Talons", "Scissors Katar",
    "Hatchet Hands", "Wrist Spike", "Fascia", "Hand Scythe", "Greater Claws", "Greater Talons",
    "Quhab", "Scissors Quhab", "Suwayyah", "Wrist Sword", "War Fist", "Battle Cestus",
    "Feral Claws", "Runic Talons", "Scissors Suwayyah",
];

pub const ORB_BASES: &[&str] = &[
    "Eagle Orb", "Sacred Globe", "Smoked Sphere", "Clasped Orb", "Jared's Stone", "Glowing Orb",
    "Crystalline Globe", "Cloudy Sphere", "Sparkling Ball", "Swirling Crystal",
    "Heavenly Stone", "Eldritch Orb", "Demon Heart", "Vortex Orb", "Dimensional Shard",
];

pub const SCEPTER_BASES: &[&str] = &[
    "Scepter", "Grand Scepter", "War Scepter", "Rune Scepter", "Holy Water Sprinkler",
    "Divine Scepter", "Mighty Scepter", "Seraph Rod", "Caduceus",
];

pub const SWORD_BASES: &[&str] = &[
    "Short Sword", "Scimitar", "Falchion", "Crystal Sword", "Broad Sword", "Long Sword",
    "War Sword", "Shamshir", "Sabre", "Two Handed Sword", "Claymore", "Giant Sword",
    "Bastard Sword", "Flamberge", "Great Sword", "Gladius", "Cutlass", "Tulwar",
    "Dimensional Blade", "Battle Sword", "Rune Sword", "Ancient Sword", "Espandon",
    "Dacian Falx", "Tusk Sword", "Gothic Sword", "Zweihander", "Executioner Sword", "Falcata",
    "Ataghan", "Elegant Blade", "Phase Blade", "Conquest Sword", "Cryptic Sword",
    "Mythical Sword", "Highland Blade", "Balrog Blade", "Champion Sword", "Colossus Sword",
    "Colossus Blade", "Legend Sword",
];

pub const STAFF_BASES: &[&str] = &[
    "Short Staff", "Long Staff", "Gnarled Staff", "Battle Staff", "War Staff", "Jo Staff",
    "Quarterstaff", "Cedar Staff", "Gothic Staff", "Rune Staff", "Walking Stick", "Stalagmite",
    "Elder Staff", "Shillelagh", "Archon Staff",
];

pub const BOW_BASES: &[&str] = &[
    "Short Bow", "Hunter's Bow", "Long Bow", "Composite Bow", "Short Battle Bow",
    "Long Battle Bow", "Short War Bow", "Long War Bow", "Edge Bow", "Razor Bow", "Cedar Bow",
    "Double Bow", "Short Siege Bow", "Long Siege Bow", "Rune Bow", "Gothic Bow", "Spider Bow",
    "Blade Bow", "Shadow Bow", "Great Bow", "Diamond Bow", "Crusader Bow", "Hydra Bow",
    "Ward Bow", "Stag Bow", "Ashwood Bow", "Matriarchal Bow", "Reflex Bow", "Ceremonial Bow",
    "Grand Matron Bow",
];

pub const WAND_BASES: &[&str] = &[
    "Wand", "Yew Wand", "Bone Wand", "Grim Wand", "Burnt Wand", "Petrified Wand", "Tomb Wand",
    "Grave Wand", "Polished Wand", "Ghost Wand", "Lich Wand", "Unearthed Wand",
];

pub const MACE_BASES: &[&str] = &[
    "Club", "Spiked Club", "Mace", "Morning Star", "Flail", "War Hammer", "Maul", "Great Maul",
    "Cudgel", "Barbed Club", "Flanged Mace", "Jagged Star", "Knout", "Battle Hammer",
    "War Club", "Martel De Fer", "Truncheon", "Tyrant Club", "Reinforced Mace", "Devil Star",
    "Scourge", "Legendary Mallet", "Ogre Maul", "Thunder Maul",
];

pub const AXE_BASES: &[&str] = &[
    "Hand Axe", "Axe", "Double Axe", "Military Pick", "War Axe", "Large Axe", "Broad Axe",
    "Battle Axe", "Great Axe", "Giant Axe", "Hatchet", "Cleaver", "Twin Axe", "Crowbill",
    "Naga", "Military Axe", "Bearded Axe", "Tabar", "Gothic Axe", "Ancient Axe", "Tomahawk",
    "Small Crescent", "Ettin Axe", "War Spike", "Berserker Axe", "Feral Axe",
    "Silver Edged Axe", "Decapitator", "Champion Axe", "Glorious Axe",
];

pub const DAGGER_BASES: &[&str] = &[
    "Dagger", "Dirk", "Kris", "Blade", "Poignard", "Rondel", "Cinquedeas", "Stiletto",
    "Bone Knife", "Mithril Point", "Fanged Knife", "Legend Spike",
];

pub const POLEARM_BASES: &[&str] = &[
    "Bardiche", "Voulge", "Scythe", "Poleaxe", "Halberd", "War Scythe", "Lochaber Axe", "Bill",
    "Battle Scythe", "Partizan", "Bec-de-Corbin", "Grim Scythe", "Ogre Axe", "Colossus Voulge",
    "Thresher", "Cryptic Axe", "Great Poleaxe", "Giant Thresher",
];

pub const THROWN_BASES: &[&str] = &[
    "Throwing Knife", "Balanced Knife", "Battle Dart", "War Dart", "Winged Knife",
    "Flying Knife", "Throwing Axe", "Balanced Axe", "Francisca", "Hurlbat", "Winged Axe",
    "Flying Axe",
];

pub const CROSSBOW_BASES: &[&str] = &[
    "Light Crossbow", "Crossbow", "Heavy Crossbow", "Repeating Crossbow", "Arbalest",
    "Siege Crossbow", "Ballista", "Chu-Ko-Nu", "Great Crossbow", "Colossus Crossbow",
    "Demon Crossbow", "Gorgon Crossbow",
];

/// Weapon family name -> member bases, in classification priority order
pub const WEAPON_FAMILIES: &[(&str, &[&str])] = &[
    ("javelin", JAVELIN_BASES),
    ("spear", SPEAR_BASES),
    ("claw", CLAW_BASES),
    ("orb", ORB_BASES),
    ("scepter", SCEPTER_BASES),
    ("sword", SWORD_BASES),
    ("staff", STAFF_BASES),
    ("wand", WAND_BASES),
    ("mace", MACE_BASES),
    ("axe", AXE_BASES),
    ("dagger", DAGGER_BASES),
    ("polearm", POLEARM_BASES),
    ("thrown", THROWN_BASES),
    ("crossbow", CROSSBOW_BASES),
    ("bow", BOW_BASES),
];

/// Finer split of the mace and thrown families
pub const BASE_SUBTYPES: &[(&str, &str)] = &[
    ("Club", "club"),
    ("Spiked Club", "club"),
    ("Mace", "mace"),
    ("Morning Star", "mace"),
    ("Flail", "mace"),
    ("War Hammer", "hammer"),
    ("Maul", "hammer"),
    ("Great Maul", "hammer"),
    ("Cudgel", "club"),
    ("Barbed Club", "club"),
    ("Flanged Mace", "mace"),
    ("Jagged Star", "mace"),
    ("Knout", "mace"),
    ("Battle Hammer", "hammer"),
    ("War Club", "hammer"),
    ("Martel De Fer", "hammer"),
    ("Truncheon", "club"),
    ("Tyrant Club", "club"),
    ("Reinforced Mace", "mace"),
    ("Devil Star", "mace"),
    ("Scourge", "mace"),
    ("Legendary Mallet", "hammer"),
    ("Ogre Maul", "hammer"),
    ("Thunder Maul", "hammer"),
    ("Throwing Knife", "dagger"),
    ("Throwing Axe", "axe"),
    ("Balanced Knife", "dagger"),
    ("Balanced Axe", "axe"),
    ("Battle Dart", "dagger"),
    ("Francisca", "axe"),
    ("War Dart", "dagger"),
    ("Hurlbat", "axe"),
    ("Flying Knife", "dagger"),
    ("Flying Axe", "axe"),
    ("Winged Knife", "dagger"),
    ("Winged Axe", "axe"),
];

pub const AMAZON_BASES: &[&str] = &[
    "stag bow", "ashwood bow", "matriarchal bow", "reflex bow", "ceremonial bow",
    "grand matron bow", "maiden javelin", "ceremonial javelin", "matriarchal javelin",
    "maiden spear", "maiden pike", "ceremonial spear", "ceremonial pike", "matriarchal spear",
    "matriarchal pike",
];

pub const ASSASSIN_BASES: &[&str] = &[
    "katar", "wrist blade", "hatchet hands", "cestus", "claws", "blade talons",
    "scissors katar", "quhab", "wrist spike", "fascia", "hand scythe", "greater claws",
    "greater talons", "scissors quhab", "suwayyah", "wrist sword", "war fist", "battle cestus",
    "feral claws", "runic talons", "scissors suwayyah",
];

pub const BARBARIAN_BASES: &[&str] = &[
    "jawbone cap", "fanged helm", "horned helm", "jawbone visor", "assault helmet",
    "avenger guard", "savage helmet", "lion helm", "slayer guard", "fury visor",
    "destroyer helm", "conqueror crown", "guardian crown",
];

pub const DRUID_BASES: &[&str] = &[
    "wolf head", "hawk helm", "antlers", "falcon mask", "spirit mask", "alpha helm",
    "griffon headdress", "hunter's guise", "sacred feathers", "totemic mask", "blood spirit",
    "sun spirit", "earth spirit", "sky spirit", "dream spirit",
];

pub const NECROMANCER_BASES: &[&str] = &[
    "preserved head", "zombie head", "unraveller head", "gargoyle head", "demon head",
    "mummified trophy", "fetish trophy", "sexton trophy", "cantor trophy", "hierophant trophy",
    "minion skull", "hellspawn skull", "overseer skull", "succubus skull", "bloodlord skull",
    "succubae skull",
];

pub const PALADIN_BASES: &[&str] = &[
    "targe", "rondache", "heraldic shield", "aerin shield", "crown shield", "akaran targe",
    "akaran rondache", "protector shield", "gilded shield", "royal shield", "sacred targe",
    "sacred rondache", "kurast shield", "zakarum shield", "vortex shield",
];

pub const SORCERESS_BASES: &[&str] = &[
    "eagle orb", "sacred globe", "smoked sphere", "clasped orb", "jared's stone", "glowing orb",
    "crystalline globe", "cloudy sphere", "sparkling ball", "swirling crystal",
    "heavenly stone", "eldritch orb", "demon heart", "vortex orb", "dimensional shard",
];

/// Class -> bases only that class can equip; first match wins
pub const CLASS_BASES: &[(&str, &[&str])] = &[
    ("amazon", AMAZON_BASES),
    ("assassin", ASSASSIN_BASES),
    ("barbarian", BARBARIAN_BASES),
    ("druid", DRUID_BASES),
    ("necromancer", NECROMANCER_BASES),
    ("paladin", PALADIN_BASES),
    ("sorceress", SORCERESS_BASES),
];

/// Base-name fragments of categories that are never exported
pub const EXCLUDED_BASE_PARTS: &[&str] = &[
    "charm", "jewel", "map", "rune", "gem", "quest", "essence", "token", "key", "organ",
];
