//! Property code table

/// Property code -> canonical output key. Codes mapping to themselves are
/// either handled by the resolver or dropped as reserved.
pub const PROPERTY_CODES: &[(&str, &str)] = &[
    ("*enr", "energy"),
    ("*vit", "vitality"),
    ("Deep-Wounds", "owounds_dps"),
    ("abs-cold", "cAbsorb_flat"),
    ("abs-cold%", "cAbsorb"),
    ("abs-fire", "fAbsorb_flat"),
    ("abs-fire%", "fAbsorb"),
    ("abs-ltng", "lAbsorb_flat"),
    ("abs-ltng%", "lAbsorb"),
    ("ac", "defense"),
    ("ac%", "defense_bonus"),
    ("ac-hth", "missile_defense"),
    ("ac-miss", "missile_defense"),
    ("ac/lvl", "defense_per_level"),
    ("addxp", "experience"),
    ("all-stats", "all_attributes"),
    ("allskills", "all_skills"),
    ("ama", "skills_amazon"),
    ("ass", "skills_assassin"),
    ("att", "ar"),
    ("att%", "ar_skillup"),
    ("att-dem/lvl", "ar_vs_demons_per_level"),
    ("att-demon", "ar_vs_demons"),
    ("att-skill", "ar_skillup"),
    ("att-und/lvl", "damage_vs_undead_per_level"),
    ("att-undead", "ar_vs_undead"),
    ("att/lvl", "ar_per_level"),
    ("aura", "aura"),
    ("balance2", "fhr"),
    ("balance1", "fhr"),
    ("balance3", "fhr"),
    ("bar", "skills_barbarian"),
    ("block", "ibc"),
    ("block-skill", "block-skill"),
    ("block2", "fbr"),
    ("block3", "fbr"),
    ("block1", "ibc"),
    ("blood-warp-life-reduction", "blood-warp-life-reduction"),
    ("bloody", "bloody"),
    ("cast-skill", "cast-skill"),
    ("cast1", "fcr"),
    ("cast2", "fcr"),
    ("cast3", "fcr"),
    ("charged", "charged"),
    ("cheap", "discount"),
    ("cold-len", "cold-len"),
    ("cold-max", "cDamage_max"),
    ("cold-min", "cDamage_min"),
    ("coldskill", "skills_cold_all"),
    ("crush", "cblow"),
    ("curse-effectiveness", "curse_effectiveness"),
    ("curse-res", "curse_length_reduced"),
    ("dclone-clout", "dclone-clout"),
    ("deadly", "dstrike"),
    ("deadly/lvl", "dstrike_per_level"),
    ("death-skill", "death-skill"),
    ("deep-wounds", "owounds_dps"),
    ("demon-heal", "life_per_demon_kill"),
    ("dev-clout", "dev-clout"),
    ("dex", "dexterity"),
    ("dex/lvl", "dexterity_per_level"),
    ("dmg", "base_damage_min"),
    ("dmg%", "e_damage"),
    ("dmg%/eth", "dmg_per_eth"),
    ("dmg%/lvl", "e_max_damage_per_level"),
    ("dmg-ac", "monster_defense_per_hit"),
    ("dmg-cold", "cDamage_max"),
    ("dmg-dem/lvl", "damage_vs_demons_per_level"),
    ("dmg-demon", "damage_vs_demons"),
    ("dmg-elem", "dmg-elem"),
    ("dmg-fire", "fDamage_max"),
    ("dmg-ltng", "lDamage_max"),
    ("dmg-mag", "dmg-mag"),
    ("dmg-max", "damage_max"),
    ("dmg-min", "damage_min"),
    ("dmg-norm", "dmg-norm"),
    ("dmg-pois", "dmg-pois"),
    ("dmg-to-mana", "damage_to_mana"),
    ("dmg-und/lvl", "damage_vs_undead_per_level"),
    ("dmg-undead", "damage_vs_undead"),
    ("dmg/lvl", "max_damage_per_level"),
    ("dragonflight-reduction", "dragonflight-reduction"),
    ("dru", "skills_druid"),
    ("dur", "durability_extra"),
    ("eaglehorn-raven", "extra_Raven_Damage"),
    ("ease", "req"),
    ("enr", "energy"),
    ("equipped-skill", "equipped-skill"),
    ("es-efficiency", "es-efficiency"),
    ("ethereal", "ethereal"),
    ("explosivearrow", "explosive_attack"),
    ("extra-cold", "cDamage"),
    ("extra-fire", "fDamage"),
    ("extra-grizzly", "extraGrizzly"),
    ("extra-ltng", "lDamage"),
    ("extra-pois", "pDamage"),
    ("extra-revives", "extra_Revives"),
    ("extra-shadow", "extra_Shadow"),
    ("extra-skele-war", "extra_Skeleton_Warriors"),
    ("extra-spirits", "extra_Spirits"),
    ("extra-spiritwolf", "extra-extra_Spirit_Wolf"),
    ("fire-max", "fDamage_max"),
    ("fire-min", "fDamage_min"),
    ("fireskill", "skills_fire_all"),
    ("freeze", "freezes_target"),
    ("gethit-skill", "gethit-skill"),
    ("gold%", "gf"),
    ("gold%/lvl", "gf_per_level"),
    ("grims-extra-skele-mage", "extra_Skeleton_Mages"),
    ("gust-reduction", "gust_Cd_Reduction"),
    ("half-half_freeze", "half-freeze"),
    ("heal-hit", "life_per_hit"),
    ("heal-kill", "life_per_kill"),
    ("hit-skill", "hit-skill"),
    ("howl", "howl"),
    ("hp", "life"),
    ("hp%", "max_life"),
    ("hp/lvl", "life_per_level"),
    ("ignore-ac", "itd"),
    ("inc-splash-radius", "extra_Melee_Splash"),
    ("indestruct", "indestructible"),
    ("joust-reduction", "joust_Cd_Reduction"),
    ("joust-reduction-zeraes", "joust_Cd_Reduction"),
    ("kick", "kick_min"),
    ("kill-skill", "kill-skill"),
    ("knock", "knockback"),
    ("leapspeed", "leapspeed"),
    ("levelup-skill", "levelup-skill"),
    ("lifesteal", "life_leech"),
    ("lifesteal-cap", "lifesteal_cap"),
    ("light", "light_radius"),
    ("light-thorns", "thorns_lightning"),
    ("ltng-max", "lDamage_max"),
    ("ltng-min", "lDamage_min"),
    ("ltngskill", "skills_lightning_all"),
    ("mag%", "mf"),
    ("mag%/lvl", "mf_per_level"),
    ("magicarrow", "magic_attack"),
    ("magskill", "skills_magic_all"),
    ("mana", "mana"),
    ("mana%", "max_mana"),
    ("mana-kill", "mana_per_kill"),
    ("mana/lvl", "mana_per_level"),
    ("manasteal", "mana_leech"),
    ("maxcurse", "maxcurse"),
    ("maxlevel-clout", "maxlevel-clout"),
    ("mindmg/energy", "mindmg_energy"),
    ("move2", "frw"),
    ("move1", "frw"),
    ("move3", "frw"),
    ("Light", "light_radius"),
    ("nec", "skills_necromancer"),
    ("no-wolves", "no_wolves"),
    ("nofreeze", "cbf"),
    ("noheal", "pmh"),
    ("openwounds", "owounds"),
    ("oskill", "oskill"),
    ("pal", "skills_paladin"),
    ("pierce", "pierce_skillup"),
    ("pierce-cold", "enemy_cRes"),
    ("pierce-fire", "enemy_fRes"),
    ("pierce-ltng", "enemy_lRes"),
    ("pierce-phys", "enemy_phyRes"),
    ("pierce-pois", "enemy_pRes"),
    ("pois-len", "pDamage_duration"),
    ("pois-max", "pDamage_max"),
    ("pois-min", "pDamage_min"),
    ("poisskill", "skills_poison_all"),
    ("randclassskill1", "randclassskill1"),
    ("randclassskill2", "randclassskill2"),
    ("rathma-clout", "rathma-clout"),
    ("reanimate", "reanimate"),
    ("red-dmg", "damage_reduced"),
    ("red-dmg%", "pdr"),
    ("red-mag", "mDamage_reduced"),
    ("reduce-ac", "target_defense"),
    ("regen", "life_replenish"),
    ("regen-mana", "mana_regen"),
    ("regen-stam", "heal_stam"),
    ("rep-charge", "autoreplenish"),
    ("rep-dur", "autorepair"),
    ("res-all", "all_res"),
    ("res-all-max", "res-all-max"),
    ("res-cold", "cRes"),
    ("res-cold-max", "cRes_max"),
    ("res-fire", "fRes"),
    ("res-fire-max", "fRes_max"),
    ("res-ltng", "lRes"),
    ("res-ltng-max", "lRes_max"),
    ("res-pois", "pRes"),
    ("res-pois-len", "poison_length_reduced"),
    ("res-pois-max", "pRes_max"),
    ("rip", "peace"),
    ("skill", "skill"),
    ("skill-rand", "skill-rand"),
    ("skilltab", "skilltab"),
    ("slow", "slows_target"),
    ("sock", "sockets"),
    ("socketed-text", "socketed-text"),
    ("sor", "skills_sorceress"),
    ("sorc-skill-rand-ctc", "sorc_skill_rand_ctc"),
    ("splash%/missinghp%", "splash_missinghp"),
    ("stam", "stamina"),
    ("stamdrain", "slower_stam_drain"),
    ("state", "state"),
    ("str", "strength"),
    ("str/lvl", "strength_per_level"),
    ("stupidity", "blind_on_hit"),
    ("swing1", "ias"),
    ("swing2", "ias"),
    ("swing3", "ias"),
    ("thorns", "thorns"),
    ("thorns/lvl", "thorns_per_level"),
    ("vit", "vitality"),
    ("vit/lvl", "vitality_per_level"),
    ("half-freeze", "half_freeze"),
    ("max-deadly", "max_dstrike"),
    ("splash", "melee_splash"),
    ("abs-cold/lvl", "abs_cold_lvl"),
    ("dmg-ltng/lvl", "lDamage_max_per_level"),
    ("res-fire/lvl", "fRes_per_level"),
    ("res-cold/lvl", "cRes_per_level"),
    ("res-ltng/lvl", "lRes_per_level"),
    ("dmg-cold/lvl", "cDamage_max_per_level"),
    ("regen-stam/lvl", "heal_stam_per_level"),
    ("abs-mag", "mAbsorb_flat"),
    ("extra-hydra", "extraHydra"),
    ("extra-golem", "extraGolem"),
    ("extra-valk", "extraValkyries"),
    ("extra-skele-archer", "extra_Skeleton_Archers"),
    ("infinityspeed", "frw"),
    ("crush-efficiency", "crush_efficiency"),
    ("extra-cold-arrows", "extra_cold_arrows"),
];
