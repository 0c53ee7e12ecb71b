//! Property resolution: one `(code, param, min, max)` tuple from a source
//! table becomes zero or more canonical `(key, value)` pairs.

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::lookups::Lookups;
use crate::merger::ResolvedProperties;
use crate::runeword::RuneWordBook;
use crate::table::CellValue;

/// One property column group of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PropertySlot<'a> {
    pub code: &'a str,
    pub param: &'a str,
    pub min: &'a str,
    pub max: &'a str,
}

impl<'a> PropertySlot<'a> {
    pub fn new(code: &'a str, param: &'a str, min: &'a str, max: &'a str) -> Self {
        Self {
            code: code.trim(),
            param: param.trim(),
            min: min.trim(),
            max: max.trim(),
        }
    }

    /// Nothing to resolve: no code, or neither a max nor a parameter
    pub fn is_blank(&self) -> bool {
        self.code.is_empty() || (self.max.is_empty() && self.param.is_empty())
    }
}

/// Keys that hold enemy resistance reductions; stored negative
const ENEMY_RESISTANCES: &[&str] = &[
    "enemy_fRes",
    "enemy_cRes",
    "enemy_lRes",
    "enemy_pRes",
    "enemy_phyRes",
];

/// Proc-style codes and the trigger tag their output keys use
const PROC_TRIGGERS: &[(&str, &str)] = &[
    ("hit-skill", "strike"),
    ("block-skill", "onblock"),
    ("levelup-skill", "onlevel"),
    ("kill-skill", "onkill"),
    ("cast-skill", "cast"),
    ("gethit-skill", "gethit"),
    ("death-skill", "ondeath"),
];

/// Poison parameter -> (divisor, seconds)
const POISON_CURVE: &[(i64, f64, i64)] = &[
    (25, 10.24, 1),
    (50, 5.1, 2),
    (75, 3.3, 3),
    (100, 2.5, 4),
    (125, 2.0, 5),
];

const RANDOM_DRUID_SKILL: i64 = 250;

/// Codes with a dedicated handler in [`Resolver::resolve`]
const SPECIAL_CODES: &[&str] = &[
    "runeword",
    "skilltab",
    "skill",
    "oskill",
    "aura",
    "equipped-skill",
    "skill-rand",
    "charged",
    "dmg-norm",
    "dmg-mag",
    "dmg-elem",
    "res-all-max",
    "howl",
    "dmg-pois",
    "silence-fhr-ias",
    "plague-fcr-pierce",
    "str-and-vit",
];

/// Whether `code` is resolved by a special case rather than the code table
pub fn handles_code(code: &str) -> bool {
    let code = code.trim().to_lowercase();
    SPECIAL_CODES.contains(&code.as_str()) || PROC_TRIGGERS.iter().any(|(c, _)| *c == code)
}

/// Resolves property tuples against the lookup tables and, when one is
/// attached, a rune word book.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    lookups: &'a Lookups,
    runewords: Option<&'a RuneWordBook>,
}

/// Per-call state shared by the special-case handlers
struct Ctx<'r, 'a> {
    item: &'r str,
    code: &'r str,
    param: &'r str,
    value: CellValue,
    min: CellValue,
    group: Option<&'r str>,
    diags: &'r mut Diagnostics,
    resolver: &'r Resolver<'a>,
}

impl Ctx<'_, '_> {
    fn report(&mut self, kind: DiagnosticKind, message: String) -> ResolvedProperties {
        self.diags.push(self.item, kind, message);
        ResolvedProperties::new()
    }

    fn skill(&mut self) -> Option<&'static str> {
        let name = self.resolver.lookups.skill_name(self.param);
        if name.is_none() {
            let message = format!("{}: unknown skill '{}'", self.code, self.param);
            self.diags.push(self.item, DiagnosticKind::UnknownSkill, message);
        }
        name
    }
}

impl<'a> Resolver<'a> {
    pub fn new(lookups: &'a Lookups) -> Self {
        Self {
            lookups,
            runewords: None,
        }
    }

    /// Enable `runeword` properties
    pub fn with_runewords(mut self, book: &'a RuneWordBook) -> Self {
        self.runewords = Some(book);
        self
    }

    pub fn lookups(&self) -> &'a Lookups {
        self.lookups
    }

    /// Resolve a single slot. `group` is the equipment context (weapon
    /// family, `shield`, `armor`, ...) used by rune word expansion.
    pub fn resolve(
        &self,
        item: &str,
        slot: &PropertySlot<'_>,
        group: Option<&str>,
        diags: &mut Diagnostics,
    ) -> ResolvedProperties {
        if slot.is_blank() {
            return ResolvedProperties::new();
        }

        let raw_value = if slot.max.is_empty() { slot.param } else { slot.max };
        let code = slot.code.to_lowercase();
        let mut ctx = Ctx {
            item,
            code: &code,
            param: slot.param,
            value: CellValue::parse_numeric_or_string(raw_value),
            min: CellValue::parse_numeric_or_string(slot.min),
            group,
            diags,
            resolver: self,
        };

        if let Some(trigger) = PROC_TRIGGERS
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, t)| *t)
        {
            return resolve_proc(&mut ctx, trigger);
        }

        match code.as_str() {
            "runeword" => self.resolve_runeword(&mut ctx),
            "skilltab" => resolve_skilltab(&mut ctx),
            "skill" | "oskill" => resolve_skill(&mut ctx),
            "aura" => resolve_aura(&mut ctx),
            "equipped-skill" => resolve_equipped_skill(&ctx),
            "skill-rand" => resolve_random_skill(&mut ctx),
            "charged" => resolve_charges(&mut ctx),
            "dmg-norm" => same_value(&["damage_min", "damage_max"], &ctx.value),
            "dmg-mag" => same_value(&["mDamage_min", "mDamage_max"], &ctx.value),
            "dmg-elem" => resolve_elemental(&ctx),
            "res-all-max" => same_value(&["fRes_max", "lRes_max", "cRes_max", "pRes_max"], &ctx.value),
            "howl" => resolve_howl(&mut ctx),
            "dmg-pois" => resolve_poison(&mut ctx),
            "silence-fhr-ias" => same_value(&["fhr", "ias"], &ctx.value),
            "plague-fcr-pierce" => {
                let mut props = ResolvedProperties::new();
                props.insert("fcr", ctx.value.clone());
                props.insert("enemy_pRes", ctx.value.negated());
                props
            }
            "str-and-vit" => same_value(&["strength", "vitality"], &ctx.value),
            _ => self.resolve_generic(&mut ctx, slot.code),
        }
    }

    /// Resolve slots left to right, stacking repeated integer keys
    pub fn resolve_all<'s>(
        &self,
        item: &str,
        slots: impl IntoIterator<Item = PropertySlot<'s>>,
        group: Option<&str>,
        diags: &mut Diagnostics,
    ) -> ResolvedProperties {
        let mut props = ResolvedProperties::new();
        for slot in slots {
            let resolved = self.resolve(item, &slot, group, diags);
            props.combine(&resolved);
        }
        props
    }

    fn resolve_runeword(&self, ctx: &mut Ctx<'_, '_>) -> ResolvedProperties {
        let Some(book) = self.runewords else {
            let message = format!("rune word '{}' requested without a rune word table", ctx.param);
            return ctx.report(DiagnosticKind::UnknownRuneWord, message);
        };
        match book.get_runeword(ctx.param, ctx.group, self.lookups, ctx.diags, ctx.item) {
            Some(runeword) => runeword.rwstats,
            None => ResolvedProperties::new(),
        }
    }

    fn resolve_generic(&self, ctx: &mut Ctx<'_, '_>, raw_code: &str) -> ResolvedProperties {
        let key = match self.lookups.canonical_key(raw_code) {
            Some(key) if !key.trim().is_empty() => key,
            _ => {
                if ctx.code.starts_with("map-") {
                    return ResolvedProperties::new();
                }
                let message = format!("no canonical key for property '{}'", raw_code);
                return ctx.report(DiagnosticKind::UnknownProperty, message);
            }
        };

        if key.contains(['%', '-', '/']) {
            tracing::debug!("{}: dropping reserved property '{}'", ctx.item, raw_code);
            return ResolvedProperties::new();
        }

        let mut value = ctx.value.clone();
        if ENEMY_RESISTANCES.contains(&key) {
            if let CellValue::Integer(v) = value {
                if v > 0 {
                    value = CellValue::Integer(-v);
                }
            }
        }

        let mut props = ResolvedProperties::new();
        props.insert(key, value);
        if key == "mindmg_energy" {
            props.insert("mindmg_per_energy", 1i64);
        }
        props
    }
}

fn same_value(keys: &[&str], value: &CellValue) -> ResolvedProperties {
    keys.iter().map(|k| (*k, value.clone())).collect()
}

fn resolve_skilltab(ctx: &mut Ctx<'_, '_>) -> ResolvedProperties {
    match ctx.resolver.lookups.skill_tab(ctx.param) {
        Some(tab) => same_value(&[tab], &ctx.value),
        None => {
            let message = format!("unknown skill tab '{}'", ctx.param);
            ctx.report(DiagnosticKind::MalformedParameter, message)
        }
    }
}

fn resolve_skill(ctx: &mut Ctx<'_, '_>) -> ResolvedProperties {
    let Some(name) = ctx.skill() else {
        return ResolvedProperties::new();
    };
    let key = format!("{}_{}", ctx.code, name.replace(' ', "_"));
    let mut props = ResolvedProperties::new();
    props.insert(key, ctx.value.clone());
    props
}

fn resolve_aura(ctx: &mut Ctx<'_, '_>) -> ResolvedProperties {
    let Some(name) = ctx.skill() else {
        return ResolvedProperties::new();
    };
    let mut props = ResolvedProperties::new();
    props.insert("aura", name);
    props.insert("aura_lvl", ctx.value.clone());
    props
}

fn resolve_equipped_skill(ctx: &Ctx<'_, '_>) -> ResolvedProperties {
    let skill = ctx.param.strip_suffix("SelfAura").unwrap_or(ctx.param).trim();
    let mut props = ResolvedProperties::new();
    props.insert("equipped_skill", skill);
    props.insert("equipped_skill_level", ctx.value.clone());
    props
}

fn resolve_random_skill(ctx: &mut Ctx<'_, '_>) -> ResolvedProperties {
    if ctx.value.as_i64() != Some(RANDOM_DRUID_SKILL) {
        let message = format!("unsupported random skill range '{}'", ctx.value);
        return ctx.report(DiagnosticKind::MalformedParameter, message);
    }
    let mut props = ResolvedProperties::new();
    props.insert("random_skill", "Random Druid Skill");
    props.insert("random_skill_level", CellValue::parse_numeric_or_string(ctx.param));
    props
}

fn resolve_proc(ctx: &mut Ctx<'_, '_>, trigger: &str) -> ResolvedProperties {
    let Some(name) = ctx.skill() else {
        return ResolvedProperties::new();
    };
    proc_properties(trigger, name, &ctx.min, &ctx.value)
}

fn proc_properties(trigger: &str, skill: &str, chance: &CellValue, level: &CellValue) -> ResolvedProperties {
    let mut props = ResolvedProperties::new();
    props.insert(format!("{}_skill", trigger), skill);
    props.insert(format!("{}_chance", trigger), chance.clone());
    props.insert(format!("{}_level", trigger), level.clone());
    props
}

fn resolve_charges(ctx: &mut Ctx<'_, '_>) -> ResolvedProperties {
    let Some(name) = ctx.skill() else {
        return ResolvedProperties::new();
    };
    let mut props = ResolvedProperties::new();
    props.insert("charges_skill", name);
    props.insert("charges_charges", ctx.min.clone());
    props.insert("charges_level", ctx.value.clone());
    props
}

fn resolve_elemental(ctx: &Ctx<'_, '_>) -> ResolvedProperties {
    let mut props = ResolvedProperties::new();
    for element in ["f", "c", "l"] {
        props.insert(format!("{}Damage_min", element), ctx.min.clone());
        props.insert(format!("{}Damage_max", element), ctx.value.clone());
    }
    props
}

/// Equal min and max encode a flee chance; anything else is an on-hit proc.
fn resolve_howl(ctx: &mut Ctx<'_, '_>) -> ResolvedProperties {
    if ctx.min != ctx.value {
        let skill = ctx.resolver.lookups.skill_name(ctx.param).unwrap_or("Howl");
        return proc_properties("hit", skill, &ctx.min, &ctx.value);
    }

    let Some(value) = ctx.value.as_f64() else {
        let message = format!("howl value '{}' is not numeric", ctx.value);
        return ctx.report(DiagnosticKind::MalformedParameter, message);
    };
    let flee = if value == 100.0 {
        100
    } else {
        (value * 0.75).floor() as i64
    };
    let mut props = ResolvedProperties::new();
    props.insert("flee_on_hit", flee);
    props
}

fn resolve_poison(ctx: &mut Ctx<'_, '_>) -> ResolvedProperties {
    let curve = ctx
        .param
        .parse::<i64>()
        .ok()
        .and_then(|p| POISON_CURVE.iter().find(|(param, _, _)| *param == p));
    let Some((_, divisor, seconds)) = curve else {
        let message = format!("no poison curve for parameter '{}'", ctx.param);
        return ctx.report(DiagnosticKind::MalformedParameter, message);
    };
    let Some(value) = ctx.value.as_f64() else {
        let message = format!("poison value '{}' is not numeric", ctx.value);
        return ctx.report(DiagnosticKind::MalformedParameter, message);
    };

    let mut props = ResolvedProperties::new();
    props.insert("dmg_pois", (value / divisor).floor() as i64);
    props.insert("dmg_pois_time", *seconds);
    props
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(code: &str, param: &str, min: &str, max: &str) -> (ResolvedProperties, Diagnostics) {
        let lookups = Lookups::new();
        let mut diags = Diagnostics::new();
        let slot = PropertySlot::new(code, param, min, max);
        let props = Resolver::new(&lookups).resolve("Test Item", &slot, Some("sword"), &mut diags);
        (props, diags)
    }

    fn pairs(props: &ResolvedProperties) -> Vec<(String, CellValue)> {
        props.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn test_blank_slot_is_empty() {
        let (props, diags) = resolve("", "", "1", "2");
        assert!(props.is_empty());
        let (props, diags2) = resolve("res-fire", "", "10", "");
        assert!(props.is_empty());
        assert!(diags.is_empty() && diags2.is_empty());
    }

    #[test]
    fn test_generic_property() {
        let (props, diags) = resolve("res-fire", "", "10", "20");
        assert_eq!(props.get("fRes"), Some(&CellValue::Integer(20)));
        assert!(diags.is_empty());
    }

    #[test]
    fn test_value_falls_back_to_param() {
        let (props, _) = resolve("res-fire", "15", "", "");
        assert_eq!(props.get("fRes"), Some(&CellValue::Integer(15)));
    }

    #[test]
    fn test_unknown_property_is_diagnosed() {
        let (props, diags) = resolve("no-such-prop", "", "1", "1");
        assert!(props.is_empty());
        assert_eq!(diags.count_of(DiagnosticKind::UnknownProperty), 1);
    }

    #[test]
    fn test_map_codes_dropped_silently() {
        let (props, diags) = resolve("map-mon-dropjewelry", "", "1", "1");
        assert!(props.is_empty());
        assert!(diags.is_empty());
    }

    #[test]
    fn test_reserved_keys_dropped_silently() {
        let (props, diags) = resolve("cold-len", "", "50", "50");
        assert!(props.is_empty());
        assert!(diags.is_empty());
    }

    #[test]
    fn test_enemy_resistance_forced_negative() {
        let (props, _) = resolve("pierce-fire", "", "25", "25");
        assert_eq!(props.get("enemy_fRes"), Some(&CellValue::Integer(-25)));

        let (props, _) = resolve("pierce-fire", "", "-25", "-25");
        assert_eq!(props.get("enemy_fRes"), Some(&CellValue::Integer(-25)));
    }

    #[test]
    fn test_mindmg_energy_companion_flag() {
        let (props, _) = resolve("mindmg/energy", "", "", "3");
        assert_eq!(props.get("mindmg_energy"), Some(&CellValue::Integer(3)));
        assert_eq!(props.get("mindmg_per_energy"), Some(&CellValue::Integer(1)));
    }

    #[test]
    fn test_dmg_elem_fans_out() {
        let (props, _) = resolve("dmg-elem", "", "5", "12");
        let expected: Vec<(String, CellValue)> = [
            ("fDamage_min", 5),
            ("fDamage_max", 12),
            ("cDamage_min", 5),
            ("cDamage_max", 12),
            ("lDamage_min", 5),
            ("lDamage_max", 12),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), CellValue::Integer(*v)))
        .collect();
        assert_eq!(pairs(&props), expected);
    }

    #[test]
    fn test_dmg_pois_curve() {
        let (props, _) = resolve("dmg-pois", "75", "100", "100");
        assert_eq!(props.get("dmg_pois"), Some(&CellValue::Integer(30)));
        assert_eq!(props.get("dmg_pois_time"), Some(&CellValue::Integer(3)));
        assert_eq!(props.len(), 2);
    }

    #[test]
    fn test_dmg_pois_unknown_param() {
        let (props, diags) = resolve("dmg-pois", "60", "100", "100");
        assert!(props.is_empty());
        assert_eq!(diags.count_of(DiagnosticKind::MalformedParameter), 1);
    }

    #[test]
    fn test_howl_flee_chance() {
        let (props, _) = resolve("howl", "", "16", "16");
        assert_eq!(pairs(&props), vec![("flee_on_hit".to_string(), CellValue::Integer(12))]);

        let (props, _) = resolve("howl", "", "100", "100");
        assert_eq!(props.get("flee_on_hit"), Some(&CellValue::Integer(100)));
    }

    #[test]
    fn test_howl_as_hit_proc() {
        let (props, _) = resolve("howl", "130", "5", "3");
        assert_eq!(props.get("hit_skill"), Some(&CellValue::from("Howl")));
        assert_eq!(props.get("hit_chance"), Some(&CellValue::Integer(5)));
        assert_eq!(props.get("hit_level"), Some(&CellValue::Integer(3)));
    }

    #[test]
    fn test_skill_key_uses_display_name() {
        let (props, _) = resolve("oskill", "Battle Orders", "", "3");
        assert_eq!(props.get("oskill_Battle_Orders"), Some(&CellValue::Integer(3)));

        let (props, _) = resolve("skill", "47", "", "2");
        assert_eq!(props.get("skill_Fire_Ball"), Some(&CellValue::Integer(2)));
    }

    #[test]
    fn test_unknown_skill() {
        let (props, diags) = resolve("skill", "9999", "", "2");
        assert!(props.is_empty());
        assert_eq!(diags.count_of(DiagnosticKind::UnknownSkill), 1);
    }

    #[test]
    fn test_skilltab() {
        let (props, _) = resolve("skilltab", "6", "", "2");
        assert_eq!(props.get("skills_curses"), Some(&CellValue::Integer(2)));

        let (props, diags) = resolve("skilltab", "40", "", "2");
        assert!(props.is_empty());
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_aura() {
        let (props, _) = resolve("aura", "Fanaticism", "", "17");
        assert_eq!(props.get("aura"), Some(&CellValue::from("Fanaticism")));
        assert_eq!(props.get("aura_lvl"), Some(&CellValue::Integer(17)));
    }

    #[test]
    fn test_equipped_skill_strips_self_aura() {
        let (props, _) = resolve("equipped-skill", "MightSelfAura", "", "5");
        assert_eq!(props.get("equipped_skill"), Some(&CellValue::from("Might")));
        assert_eq!(props.get("equipped_skill_level"), Some(&CellValue::Integer(5)));
    }

    #[test]
    fn test_random_skill() {
        let (props, _) = resolve("skill-rand", "4", "221", "250");
        assert_eq!(props.get("random_skill"), Some(&CellValue::from("Random Druid Skill")));
        assert_eq!(props.get("random_skill_level"), Some(&CellValue::Integer(4)));

        let (props, diags) = resolve("skill-rand", "4", "36", "65");
        assert!(props.is_empty());
        assert_eq!(diags.count_of(DiagnosticKind::MalformedParameter), 1);
    }

    #[test]
    fn test_proc_skill() {
        let (props, _) = resolve("hit-skill", "Frost Nova", "10", "7");
        assert_eq!(
            pairs(&props),
            vec![
                ("strike_skill".to_string(), CellValue::from("Frost Nova")),
                ("strike_chance".to_string(), CellValue::Integer(10)),
                ("strike_level".to_string(), CellValue::Integer(7)),
            ]
        );

        let (props, _) = resolve("gethit-skill", "Nova", "12", "9");
        assert_eq!(props.get("gethit_skill"), Some(&CellValue::from("Nova")));
    }

    #[test]
    fn test_charges() {
        let (props, _) = resolve("charged", "Teleport", "30", "1");
        assert_eq!(props.get("charges_skill"), Some(&CellValue::from("Teleport")));
        assert_eq!(props.get("charges_charges"), Some(&CellValue::Integer(30)));
        assert_eq!(props.get("charges_level"), Some(&CellValue::Integer(1)));
    }

    #[test]
    fn test_paired_codes() {
        let (props, _) = resolve("dmg-norm", "", "", "8");
        assert_eq!(props.get("damage_min"), Some(&CellValue::Integer(8)));
        assert_eq!(props.get("damage_max"), Some(&CellValue::Integer(8)));

        let (props, _) = resolve("dmg-mag", "", "", "12");
        assert_eq!(props.len(), 2);
        assert_eq!(props.get("mDamage_min"), Some(&CellValue::Integer(12)));
        assert_eq!(props.get("mDamage_max"), Some(&CellValue::Integer(12)));

        let (props, _) = resolve("res-all-max", "", "", "5");
        assert_eq!(props.len(), 4);
        assert_eq!(props.get("pRes_max"), Some(&CellValue::Integer(5)));

        let (props, _) = resolve("plague-fcr-pierce", "", "", "10");
        assert_eq!(props.get("fcr"), Some(&CellValue::Integer(10)));
        assert_eq!(props.get("enemy_pRes"), Some(&CellValue::Integer(-10)));

        let (props, _) = resolve("str-and-vit", "", "", "10");
        assert_eq!(props.get("strength"), Some(&CellValue::Integer(10)));
        assert_eq!(props.get("vitality"), Some(&CellValue::Integer(10)));

        let (props, _) = resolve("silence-fhr-ias", "", "", "20");
        assert_eq!(props.get("fhr"), Some(&CellValue::Integer(20)));
        assert_eq!(props.get("ias"), Some(&CellValue::Integer(20)));
    }

    #[test]
    fn test_extreme_integers_do_not_overflow() {
        let lookups = Lookups::new();
        let mut diags = Diagnostics::new();
        let slots = vec![
            PropertySlot::new("res-fire", "", "", "9223372036854775807"),
            PropertySlot::new("res-fire", "", "", "1"),
        ];
        let props = Resolver::new(&lookups).resolve_all("Test", slots, None, &mut diags);
        assert_eq!(props.get("fRes"), Some(&CellValue::Integer(i64::MAX)));

        let (props, _) = resolve("plague-fcr-pierce", "", "", "-9223372036854775808");
        assert_eq!(props.get("enemy_pRes"), Some(&CellValue::Integer(i64::MAX)));
    }

    #[test]
    fn test_runeword_without_book() {
        let (props, diags) = resolve("runeword", "Spirit", "", "");
        assert!(props.is_empty());
        assert_eq!(diags.count_of(DiagnosticKind::UnknownRuneWord), 1);
    }

    #[test]
    fn test_resolve_all_stacks_left_to_right() {
        let lookups = Lookups::new();
        let mut diags = Diagnostics::new();
        let slots = vec![
            PropertySlot::new("res-fire", "", "10", "10"),
            PropertySlot::new("res-fire", "", "15", "15"),
            PropertySlot::new("str", "", "5", "5"),
        ];
        let props = Resolver::new(&lookups).resolve_all("Test", slots, None, &mut diags);
        assert_eq!(props.get("fRes"), Some(&CellValue::Integer(25)));
    }

    #[test]
    fn test_handles_code() {
        assert!(handles_code("dmg-pois"));
        assert!(handles_code("Hit-Skill"));
        assert!(!handles_code("res-fire"));
    }
}
