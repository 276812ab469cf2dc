use anyhow::Result;
use aroni_core::{
    compute_leaf_hash, Error, ScanEvent, ScanLogEntry, ScanRecord, ScanResult,
    UtcDateTime,
};

fn record(timestamp: &str) -> Result<ScanRecord> {
    Ok(ScanRecord {
        event: ScanEvent {
            tracking_id: "TRK-0001".to_owned(),
            location: "dock 3".to_owned(),
            scanned_quantity: 4,
            scanned_weight_kg: 12.5,
            scanned_dimensions_cm: [40.0, 30.0, 20.0],
            timestamp: UtcDateTime::parse_rfc3339(timestamp)?,
        },
        result: ScanResult::Mismatch,
        reasons: vec!["quantity mismatch: declared 5, scanned 4".to_owned()],
    })
}

#[test]
fn canonical_hash_deterministic() -> Result<()> {
    let a = compute_leaf_hash(&record("2024-05-01T00:00:00.5Z")?)?;
    let b = compute_leaf_hash(&record("2024-05-01T00:00:00.5Z")?)?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn canonical_hash_normalizes_offset() -> Result<()> {
    let utc = compute_leaf_hash(&record("2024-05-01T00:00:00Z")?)?;
    let nzst = compute_leaf_hash(&record("2024-05-01T12:00:00+12:00")?)?;
    assert_eq!(utc, nzst);
    Ok(())
}

#[test]
fn canonical_hash_commits_to_every_field() -> Result<()> {
    let base = record("2024-05-01T00:00:00Z")?;
    let expected = compute_leaf_hash(&base)?;

    let mutations: Vec<Box<dyn Fn(&mut ScanRecord)>> = vec![
        Box::new(|r: &mut ScanRecord| r.event.tracking_id.push('X')),
        Box::new(|r: &mut ScanRecord| r.event.location.clear()),
        Box::new(|r: &mut ScanRecord| r.event.scanned_quantity += 1),
        Box::new(|r: &mut ScanRecord| r.event.scanned_weight_kg += 0.001),
        Box::new(|r: &mut ScanRecord| r.event.scanned_dimensions_cm.swap(0, 1)),
        Box::new(|r: &mut ScanRecord| r.result = ScanResult::Match),
        Box::new(|r: &mut ScanRecord| r.reasons.clear()),
        Box::new(|r: &mut ScanRecord| {
            r.event.timestamp =
                UtcDateTime::parse_rfc3339("2024-05-01T00:00:00.000000001Z")
                    .unwrap()
        }),
    ];

    for mutate in mutations {
        let mut changed = base.clone();
        mutate(&mut changed);
        assert_ne!(expected, compute_leaf_hash(&changed)?);
    }
    Ok(())
}

#[test]
fn canonical_hash_field_boundaries() -> Result<()> {
    // Moving bytes between adjacent strings changes the hash
    let mut a = record("2024-05-01T00:00:00Z")?;
    a.event.tracking_id = "TRK-00".to_owned();
    a.event.location = "01dock".to_owned();
    let mut b = a.clone();
    b.event.tracking_id = "TRK-0001".to_owned();
    b.event.location = "dock".to_owned();
    assert_ne!(compute_leaf_hash(&a)?, compute_leaf_hash(&b)?);
    Ok(())
}

#[test]
fn canonical_hash_rejects_non_finite() -> Result<()> {
    let mut record = record("2024-05-01T00:00:00Z")?;
    record.event.scanned_weight_kg = f64::NAN;
    assert!(matches!(
        compute_leaf_hash(&record),
        Err(Error::Encoding { .. })
    ));
    Ok(())
}

#[test]
fn canonical_hash_entry_intact_after_json() -> Result<()> {
    let entry = ScanLogEntry::new(record("2024-05-01T09:30:00+09:30")?)?;
    assert!(entry.is_intact()?);

    let json = serde_json::to_string(&entry)?;
    let decoded: ScanLogEntry = serde_json::from_str(&json)?;
    assert_eq!(entry.leaf_hash(), decoded.leaf_hash());
    assert!(decoded.is_intact()?);

    // Tampering with a stored field is detected
    let mut value: serde_json::Value = serde_json::from_str(&json)?;
    value["scanned_quantity"] = serde_json::json!(5);
    let tampered: ScanLogEntry = serde_json::from_value(value)?;
    assert!(!tampered.is_intact()?);
    Ok(())
}
