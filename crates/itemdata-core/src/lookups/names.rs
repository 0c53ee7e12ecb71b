//! Name tables: corrections, exclusions, boss drops and rune words

/// Source-table spelling -> in-game name, for both item and base names.
pub const NAME_CORRECTIONS: &[(&str, &str)] = &[
    ("Jo Stalf", "Jo Staff"),
    ("Darkforge Spawn", "Darkforce Spawn"),
    ("Bracers", "Chain Gloves"),
    ("Irices Shard", "Spectral Shard"),
    ("Heirophant Trophy", "Hierophant Trophy"),
    ("Deaths's Web", "Death's Web"),
    ("Akarats Devotion", "Akarat's Devotion"),
    ("Titangrip", "Titan's Grip"),
    ("Souldrain", "Soul Drainer"),
    ("Gloves", "Leather Gloves"),
    ("Crusader Guantlets", "Crusader Gauntlets"),
    ("Battle Guantlets", "Battle Gauntlets"),
    ("Lavagout", "Lava Gout"),
    ("AncientArmor", "Ancient Armor"),
    ("Victors Silk", "Silks of the Victor"),
    ("The Spirit Shroud", "Spirit Shroud"),
    ("Blinkbats Form", "Blinkbat's Form"),
    ("Ornate Armor", "Ornate Plate"),
    ("Tresllised Armor", "Trellised Armor"),
    ("Ironpelt", "Iron Pelt"),
    ("Que-Hegan's Wisdon", "Que-Hegan's Wisdom"),
    ("Skin of the Flayerd One", "Skin of the Flayed One"),
    ("SerpentSkin Armor", "Serpentskin Armor"),
    ("Spiritforge", "Spirit Forge"),
    ("Steel Carapice", "Steel Carapace"),
    ("Hard Leather", "Hard Leather Armor"),
    ("Light Plate Boots", "Light Plated Boots"),
    ("Gorerider", "Gore Rider"),
    ("Leather Boots", "Boots"),
    ("Itheraels Path", "Itherael's Path"),
    ("Wyrrnhide Boots", "Wyrmhide Boots"),
    ("Merman's Speed", "Merman's Sprocket"),
    ("Shadowdancer", "Shadow Dancer"),
    ("Wartraveler", "War Traveler"),
    ("Plate Boots", "Light Plated Boots"),
    ("Verdugo's Hearty Cord", "Verdungo's Hearty Cord"),
    ("Thudergod's Vigor", "Thundergod's Vigor"),
    ("Lenyms Cord", "Lenymo"),
    ("Gloomstrap", "Gloom's Trap"),
    ("Girdle", "Plated Belt"),
    ("Headhunter's Glory", "Head Hunter's Glory"),
    ("Kerke's Sanctuary", "Gerke's Sanctuary"),
    ("Mirror Shield", "Twilight's Reflection"),
    ("Mosers Blessed Circle", "Moser's Blessed Circle"),
    ("Raekors Virtue", "Raekor's Virtue"),
    ("Cerebus", "Cerebus' Bite"),
    ("Spiritkeeper", "Spirit Keeper"),
    ("Kalans Legacy", "Kalan's Legacy"),
    ("Martyr", "Martyrdom"),
    ("Bonesob", "Bonesnap"),
    ("Shillelah", "Shillelagh"),
    ("Balista", "Ballista"),
    ("Espadon", "Espandon"),
    ("Zeraes Resolve", "Zerae's Resolve"),
    ("Wraithflight", "Wraith Flight"),
    ("Hunter's Bow", "Hunter's Bow"),
    ("Whichwild String", "Witchwild String"),
    ("The Reedeemer", "The Redeemer"),
    ("The Minataur", "The Minotaur"),
    ("The Humongous", "Humongous"),
    ("The Generals Tan Do Li Ga", "The General's Tan Do Li Ga"),
    ("The Chieftan", "The Chieftain"),
    ("The Atlantian", "The Atlantean"),
    ("Stilleto", "Stiletto"),
    ("Steelpillar", "Steel Pillar"),
    ("Skullcollector", "Skull Collector"),
    ("Sigurd's Staunch", "Siggard's Staunch"),
    ("Mithral Point", "Mithril Point"),
    ("2-Handed Sword", "Two Handed Sword"),
    ("Runemaster", "Rune Master"),
    ("Rixots Keen", "Rixot's Keen"),
    ("Rimeraven", "Raven Claw"),
    ("Razoredge", "Razor's Edge"),
    ("Pus Spiter", "Pus Spitter"),
    ("Pullspite", "Stormstrike"),
    ("Pompe's Wrath", "Pompeii's Wrath"),
    ("Piercerib", "Rogue's Bow"),
    ("Colossal Sword", "Colossus Sword"),
    ("Mindrend", "Skull Splitter"),
    ("Maelstromwrath", "Maelstrom"),
    ("Leoric's Mithril Blade", "Leoric's Mithril Bane"),
    ("Lazarus Spire", "Spire of Lazarus"),
    ("Cedarbow", "Cedar Bow"),
    ("Krintizs Skewer", "Skewer of Krintiz"),
    ("Kinemils Awl", "Kinemil's Awl"),
    ("Iros Torch", "Torch of Iro"),
    ("Ironward", "Astreon's Iron Ward"),
    ("Hadriels Hand", "Hadriel's Hand"),
    ("Gutsiphon", "Gut Siphon"),
    ("Griswolds Edge", "Griswold's Edge"),
    ("Godstrike Arch", "Goldstrike Arch"),
    ("Fechmars Axe", "Axe of Fechmar"),
    ("Silver-edged Axe", "Silver Edged Axe"),
    ("Earthshifter", "Earth Shifter"),
    ("Doomspittle", "Doomslinger"),
    ("Djinnslayer", "Djinn Slayer"),
    ("Dimoaks Hew", "Dimoak's Hew"),
    ("Demonlimb", "Demon Limb"),
    ("Deathcleaver", "Death Cleaver"),
    ("Culwens Point", "Culwen's Point"),
    ("Aidans Scar", "Aidan's Scar"),
    ("Jadetalon", "Jade Talon"),
    ("Cutthroat1", "Bartuc's Cut Throat"),
    ("Stalkers Cull", "Stalker's Cull"),
    ("Wisp", "Wisp Projector"),
    ("War Bonnet", "Biggin's Bonnet"),
    ("Overlords Helm", "Overlord's Helm"),
    ("Nightmares Feast", "Ursa's Nightmare"),
    ("Aldur's Gauntlet", "Aldur's Rhythm"),
    ("McAuley's Paragon", "Sander's Paragon"),
    ("McAuley's Riprap", "Sander's Riprap"),
    ("McAuley's Taboo", "Sander's Taboo"),
    ("McAuley's Superstition", "Sander's Superstition"),
    ("Cow King's Hoofs", "Cow King's Hooves"),
    ("Fathom", "Death's Fathom"),
    ("Bloodraven's Charge", "Blood Raven's Charge"),
    ("Shadowkiller", "Shadow Killer"),
    ("Vampiregaze", "Vampire Gaze"),
    ("Steelshade", "Steel Shade"),
    ("Giantskull", "Giant Skull"),
    ("Valkiry Wing", "Valkyrie Wing"),
    ("Peasent Crown", "Peasant Crown"),
    ("Umes Lament", "Ume's Lament"),
    ("Griswolds's Redemption", "Griswold's Redemption"),
    ("Haemosu's Adament", "Haemosu's Adamant"),
    ("Spiritual Custodian", "Dark Adherent"),
    ("Tal Rasha's Howling Wind", "Tal Rasha's Guardianship"),
    ("Venomsward", "Venom Ward"),
    ("Heaven's Taebaek", "Taebaek's Glory"),
    ("Wihtstan's Guard", "Whitstan's Guard"),
    ("Hwanin's Seal", "Hwanin's Blessing"),
    ("Tal Rasha's Fire-Spun Cloth", "Tal Rasha's Fine-Spun Cloth"),
    ("Saber", "Sabre"),
];

/// Name fragments of items that are never exported
pub const SKIPPED_NAMES: &[&str] = &["Khalim", "Hell Forge Hammer", "Horadric Staff", "Staff of Kings"];

/// Exact item name -> boss tag
pub const BOSS_ITEMS: &[(&str, &str)] = &[
    ("Ring of Regha", "rathma"),
    ("Lilith's Temptation", "lilith"),
    ("Throne of Power", "dclone"),
    ("Band of Skulls", "uber_ancients"),
];

/// Rune ids as used by the rune word and gem tables, in rune order
pub const RUNE_IDS: &[(&str, &str)] = &[
    ("r01", "El"), ("r02", "Eld"), ("r03", "Tir"), ("r04", "Nef"), ("r05", "Eth"),
    ("r06", "Ith"), ("r07", "Tal"), ("r08", "Ral"), ("r09", "Ort"), ("r10", "Thul"),
    ("r11", "Amn"), ("r12", "Sol"), ("r13", "Shael"), ("r14", "Dol"), ("r15", "Hel"),
    ("r16", "Io"), ("r17", "Lum"), ("r18", "Ko"), ("r19", "Fal"), ("r20", "Lem"),
    ("r21", "Pul"), ("r22", "Um"), ("r23", "Mal"), ("r24", "Ist"), ("r25", "Gul"),
    ("r26", "Vex"), ("r27", "Ohm"), ("r28", "Lo"), ("r29", "Sur"), ("r30", "Ber"),
    ("r31", "Jah"), ("r32", "Cham"), ("r33", "Zod"),
];

/// Rune word table name -> in-game name
pub const RUNE_WORD_RENAMES: &[(&str, &str)] = &[
    ("Doomsayer", "Doom"),
    ("Widowmaker", "Grief"),
    ("Exile's Path", "Exile"),
    ("Bound by Duty", "Chains of Honor"),
    ("The Beast", "Beast"),
];

/// Equipment group or family -> rune word item-type code
pub const ITEM_TYPE_CODES: &[(&str, &str)] = &[
    ("weap", "weap"),
    ("swor", "swor"),
    ("axe", "axe"),
    ("mace", "mace"),
    ("hamm", "hamm"),
    ("scep", "scep"),
    ("pole", "pole"),
    ("staf", "staf"),
    ("wand", "wand"),
    ("club", "club"),
    ("miss", "miss"),
    ("jave", "jave"),
    ("aspe", "aspe"),
    ("thro", "thro"),
    ("tkni", "tkni"),
    ("h2h", "h2h"),
    ("h2h2", "h2h2"),
    ("shld", "shld"),
    ("helm", "helm"),
    ("tors", "tors"),
    ("2hsw", "2hsw"),
    ("pala", "pala"),
    ("sc9", "sc9"),
    ("sorc", "sorc"),
    ("mele", "mele"),
    ("spea", "spea"),
    ("sword", "swor"),
    ("spear", "spea"),
    ("staff", "staf"),
    ("crossbow", "miss"),
    ("bow", "bow"),
    ("shield", "shld"),
    ("offhand", "shld"),
    ("armor", "tors"),
    ("weapon", "weap"),
    ("polearm", "pole"),
    ("dagger", "knif"),
    ("claw", "h2h"),
    ("orb", "orb"),
    ("thrown", "thro"),
    ("scepter", "scep"),
    ("javelin", "jave"),
];

/// Set bonus group number -> pieces needed
pub const SET_BONUS_PIECES: &[(u32, u32)] = &[(1, 2), (2, 3), (3, 4), (4, 5), (5, 6)];
