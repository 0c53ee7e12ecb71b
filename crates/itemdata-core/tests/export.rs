use itemdata_core::{
    parse_tsv_str, run_export, CellValue, DiagnosticKind, ExportConfig, Exporter, Lookups, RunReport,
    SlotGroup, TableKind,
};
use std::fs;

const UNIQUES: &str = "\
index\t*type\tenabled\tlvl req\tprop1\tpar1\tmin1\tmax1
Nagelring\tRing\t1\t7\tres-fire\t\t15\t30
Biggin's Bonnet\tCap\t0\t3\tac\t\t14\t14
Stone of Jordan\tRing\t1\t29\tmana\t\t20\t20
";

const SETS: &str = "\
index\tset\t*item\tlvl req\tprop1\tpar1\tmin1\tmax1\taprop1a\tapar1a\tamin1a\tamax1a
Angelic Halo\tAngelic Raiment\tRing\t12\tregen\t\t6\t6\tres-fire\t\t10\t10
";

const MISC: &str = "\
index\t*type\tlvl req\tprop1\tpar1\tmin1\tmax1
Stealth\tQuilted Armor\t17\truneword\tStealth\t\t
";

const RUNEWORDS: &str = "\
Name\tRune Name\tcomplete\titype1\tRune1\tRune2\tT1Code1\tT1Min1\tT1Max1\tT1Code2\tT1Min2\tT1Max2
Runeword1\tStealth\t1\ttors\tr07\tr13\tcast1\t25\t25\tdex\t6\t6
";

const GEMS: &str = "\
name\tletter\tweaponMod1Code\tweaponMod1Min\tweaponMod1Max\thelmMod1Code\thelmMod1Min\thelmMod1Max\tshieldMod1Code\tshieldMod1Min\tshieldMod1Max
Tal Rune\tTal\tres-pois\t75\t75\tres-pois\t30\t30\tres-pois\t35\t35
Shael Rune\tShael\tswing1\t20\t20\tbalance1\t20\t20\tbalance1\t20\t20
";

fn exporter() -> Exporter {
    let runewords = parse_tsv_str(RUNEWORDS, "Runes.txt").unwrap();
    let gems = parse_tsv_str(GEMS, "Gems.txt").unwrap();
    Exporter::new(Lookups::new(), &runewords, Some(&gems)).unwrap()
}

#[test]
fn test_disabled_rows_never_reach_output() {
    let uniques = parse_tsv_str(UNIQUES, "UniqueItems.txt").unwrap();
    let mut exporter = exporter();
    let export = exporter.export(&[(TableKind::Unique, &uniques)]).unwrap();

    let rings: Vec<&str> = export
        .groups
        .get(SlotGroup::Ring1)
        .iter()
        .map(|item| item.name.as_str())
        .collect();
    assert_eq!(rings, vec!["Nagelring", "Stone of Jordan"]);
    assert!(export.groups.get(SlotGroup::Helm).is_empty());
    assert_eq!(export.tables[0].rows_read, 3);
    assert_eq!(export.tables[0].rows_kept, 2);
    assert!(exporter.diagnostics().is_empty());
}

#[test]
fn test_misc_rune_word_expands_with_socket_bonuses() {
    let misc = parse_tsv_str(MISC, "Misc.txt").unwrap();
    let mut exporter = exporter();
    let export = exporter.export(&[(TableKind::Misc, &misc)]).unwrap();

    let armor = export.groups.get(SlotGroup::Armor);
    assert_eq!(armor.len(), 1);
    let stealth = &armor[0].properties;
    assert_eq!(stealth.get("fcr"), Some(&CellValue::Integer(25)));
    assert_eq!(stealth.get("dexterity"), Some(&CellValue::Integer(6)));
    assert_eq!(stealth.get("pRes"), Some(&CellValue::Integer(30)));
    assert_eq!(stealth.get("fhr"), Some(&CellValue::Integer(20)));
}

#[test]
fn test_set_rows_carry_set_name_and_bonuses() {
    let sets = parse_tsv_str(SETS, "SetItems.txt").unwrap();
    let mut exporter = exporter();
    let export = exporter.export(&[(TableKind::Set, &sets)]).unwrap();

    let halo = &export.groups.get(SlotGroup::Ring1)[0];
    assert_eq!(halo.set.as_deref(), Some("Angelic Raiment"));
    assert_eq!(halo.properties.get("fRes_set2"), Some(&CellValue::Integer(10)));
    assert_eq!(exporter.diagnostics().count_of(DiagnosticKind::UnmappedSetBonus), 0);
}

#[test]
fn test_run_export_writes_output_and_report() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("UniqueItems.txt"), UNIQUES).unwrap();
    fs::write(data.join("SetItems.txt"), SETS).unwrap();
    fs::write(data.join("Misc.txt"), MISC).unwrap();
    fs::write(data.join("Runes.txt"), RUNEWORDS).unwrap();
    fs::write(data.join("Gems.txt"), GEMS).unwrap();

    let mut config = ExportConfig::from_data_dir(&[&data], dir.path().join("out/equipment.js")).unwrap();
    config.report = Some(dir.path().join("out/report.json"));

    let report = run_export(&config).unwrap();
    assert_eq!(report.rows_read(), 5);
    assert_eq!(report.rows_kept(), 4);
    assert_eq!(report.groups.get("ring1"), Some(&3));
    assert_eq!(report.rune_words, 1);

    let js = fs::read_to_string(dir.path().join("out/equipment.js")).unwrap();
    assert!(js.starts_with("var equipment = {\n"));
    assert!(js.ends_with("};\n"));
    assert!(js.contains("\"name\": \"Stealth\""));
    assert!(!js.contains("Biggin"));

    let saved = RunReport::load(dir.path().join("out/report.json")).unwrap();
    assert_eq!(saved.tables, report.tables);
}
