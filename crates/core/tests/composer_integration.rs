//! Report composition properties over realistic payloads.

mod support;

use sladash_core::report::{compose_below_target_report, format_site_line, sp_summary};
use sladash_domain::constants::REPORT_FOOTER;
use sladash_domain::{BatteryCategory, StatusSp};
use support::{category, entry, payload};

fn mixed_payload() -> sladash_domain::SlaBelowTargetPayload {
    payload(
        "Data SLA tanggal 2025-11-20 untuk site di bawah target",
        category(
            "Talis 5",
            vec![
                entry("SITE-A", 89.456, "2h 10m", Some("Baterai drop"), StatusSp::PotensiSp),
                entry("SITE-B", 93.0, "", None, StatusSp::ClearSp),
                entry("SITE-C", 90.1, " ", Some(""), StatusSp::PotensiSp),
            ],
        ),
        category("Mix", vec![entry("SITE-D", 94.99, "45m", None, StatusSp::ClearSp)]),
        BatteryCategory { display_name: "JSPro".to_string(), total_sites: 0, sites: vec![] },
    )
}

#[test]
fn potensi_and_clear_counts_cover_every_entry() {
    let payload = mixed_payload();
    let summary = sp_summary(&payload);
    let counted = payload.battery_categories.entries().count();

    assert_eq!(summary.potensi_sp + summary.clear_sp, counted);
    assert_eq!(summary.potensi_sp, 2);
    assert_eq!(summary.clear_sp, 2);
}

#[test]
fn composing_twice_yields_identical_text() {
    let payload = mixed_payload();
    assert_eq!(compose_below_target_report(&payload), compose_below_target_report(&payload));
}

#[test]
fn report_uses_month_from_message_and_ends_with_footer() {
    let report = compose_below_target_report(&mixed_payload());

    assert!(report.starts_with("*LAPORAN SLA DI BAWAH 95.5% - NOVEMBER 2025*\n"));
    assert!(report.ends_with(REPORT_FOOTER));
    assert!(report.contains("Total Site: 4\nPotensi SP: 2\nClear SP: 2"));
}

#[test]
fn empty_category_is_left_out() {
    let report = compose_below_target_report(&mixed_payload());

    assert!(report.contains("*TALIS 5 (3 SITE)*"));
    assert!(report.contains("*MIX (1 SITE)*"));
    assert!(!report.contains("JSPRO"));
}

#[test]
fn category_with_only_clear_sites_has_no_potensi_block() {
    let report = compose_below_target_report(&mixed_payload());
    let mix = report.split("*MIX (1 SITE)*").nth(1).unwrap();
    let mix_section = mix.split(REPORT_FOOTER).next().unwrap();

    assert!(!mix_section.contains("*POTENSI SP*"));
    assert!(mix_section.contains("*CLEAR SP* (1)\n1. SITE-D - SLA 94.99% | Downtime: 45m"));
}

#[test]
fn entries_keep_payload_order_within_a_status_block() {
    let report = compose_below_target_report(&mixed_payload());

    let first = report.find("1. SITE-A").unwrap();
    let second = report.find("2. SITE-C").unwrap();
    assert!(first < second);
}

#[test]
fn blank_optional_fields_are_not_rendered() {
    let line = format_site_line(&entry("SITE-C", 90.1, " ", Some(""), StatusSp::PotensiSp));
    assert_eq!(line, "SITE-C - SLA 90.10%");
}

#[test]
fn message_without_a_real_date_uses_the_running_period_label() {
    let mut payload = mixed_payload();
    payload.message = "Periode 2025-02-30 belum lengkap".to_string();

    let report = compose_below_target_report(&payload);
    assert!(report.starts_with("*LAPORAN SLA DI BAWAH 95.5% - PERIODE BERJALAN*"));
}
