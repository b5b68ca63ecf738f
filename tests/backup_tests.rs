mod common;

use common::{temp_file, temp_home};
use fitdash::config::Config;
use fitdash::core::backup::{ArchiveFormat, BackupLogic};
use flate2::read::GzDecoder;
use std::fs;
use std::io::Read;
use std::path::Path;

const SHEET: &str = "Date,Pullups\n2025-01-01,5\n";

fn config_with_sheet(home: &str) -> Config {
    let sheet = temp_file(home, "sparta.csv");
    fs::write(&sheet, SHEET).expect("sheet");
    Config {
        sheet,
        database: temp_file(home, "audit.sqlite"),
        ..Config::default()
    }
}

fn read_zip_entry(path: &Path) -> (String, String) {
    let file = fs::File::open(path).expect("open zip");
    let mut archive = zip::ZipArchive::new(file).expect("valid zip");
    assert_eq!(archive.len(), 1);

    let mut entry = archive.by_index(0).expect("entry");
    let name = entry.name().to_string();
    let mut content = String::new();
    entry.read_to_string(&mut content).expect("utf-8 entry");
    (name, content)
}

#[test]
fn test_backup_plain_copy() {
    let home = temp_home("backup_plain");
    let cfg = config_with_sheet(&home);
    let dest = temp_file(&home, "copy.csv");

    let out = BackupLogic::backup(&cfg, &dest, None, false).expect("backup");
    assert_eq!(out, Path::new(&dest));
    assert_eq!(fs::read_to_string(&out).expect("copy"), SHEET);
}

#[test]
fn test_backup_zip_destination_holds_sheet() {
    let home = temp_home("backup_zip_name");
    let cfg = config_with_sheet(&home);
    let dest = temp_file(&home, "backup.zip");

    let out = BackupLogic::backup(&cfg, &dest, Some(ArchiveFormat::Zip), false).expect("backup");
    assert_eq!(out, Path::new(&dest));

    let (name, content) = read_zip_entry(&out);
    assert_eq!(name, "sparta.csv");
    assert_eq!(content, SHEET);
}

#[test]
fn test_backup_zip_from_csv_name() {
    let home = temp_home("backup_zip_csv");
    let cfg = config_with_sheet(&home);
    let dest = temp_file(&home, "weekly.csv");

    let out = BackupLogic::backup(&cfg, &dest, Some(ArchiveFormat::Zip), false).expect("backup");
    assert_eq!(out, Path::new(&home).join("weekly.zip"));
    assert!(!Path::new(&dest).exists());

    let (name, content) = read_zip_entry(&out);
    assert_eq!(name, "weekly.csv");
    assert_eq!(content, SHEET);
}

#[test]
fn test_backup_tgz_destination_holds_sheet() {
    let home = temp_home("backup_tgz_name");
    let cfg = config_with_sheet(&home);
    let dest = temp_file(&home, "backup.tar.gz");

    let out = BackupLogic::backup(&cfg, &dest, Some(ArchiveFormat::Tgz), false).expect("backup");
    assert_eq!(out, Path::new(&dest));

    let file = fs::File::open(&out).expect("open tgz");
    let mut archive = tar::Archive::new(GzDecoder::new(file));
    let mut entries = archive.entries().expect("entries");
    let mut entry = entries.next().expect("one entry").expect("entry");
    assert_eq!(
        entry.path().expect("path").to_string_lossy(),
        "sparta.csv"
    );
    let mut content = String::new();
    entry.read_to_string(&mut content).expect("utf-8 entry");
    assert_eq!(content, SHEET);
}

#[test]
fn test_backup_missing_sheet() {
    let home = temp_home("backup_missing");
    let cfg = Config {
        sheet: temp_file(&home, "nope.csv"),
        database: temp_file(&home, "audit.sqlite"),
        ..Config::default()
    };
    let dest = temp_file(&home, "copy.csv");
    assert!(BackupLogic::backup(&cfg, &dest, None, false).is_err());
}
