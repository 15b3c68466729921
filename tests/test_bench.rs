use dictlookup::bench::{compare, run};
use dictlookup::config::BenchConfig;
use dictlookup::dataset::{generate, sort_by_quality};
use dictlookup::random::seeded;
use dictlookup::Error;

fn dataset(record_count: usize) -> Vec<dictlookup::record::Record> {
    let config = BenchConfig {
        record_count,
        ..BenchConfig::default()
    };
    let mut records = generate(&config, &mut seeded(config.seed));
    sort_by_quality(&mut records);
    records
}

#[test]
fn ten_records_three_samples() {
    let records = dataset(10);
    let mut out = Vec::new();
    let report = compare(&records, &[3, 7, 10], &mut out).unwrap();

    assert_eq!(report.ids, vec![3, 7, 10]);
    assert_eq!(report.linear[0].map(|r| r.id), Some(3));
    assert_eq!(report.linear[1].map(|r| r.id), Some(7));
    assert_eq!(report.linear[2], None);
    assert_eq!(report.hashed, report.linear);
    assert_eq!(report.misses(), 1);
    assert!(report.speedup() > 0.0);

    let expected_3 = records.iter().find(|r| r.id == 3).copied();
    assert_eq!(report.hashed[0], expected_3);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Locating data in list... done.");
    assert!(lines[1].starts_with("DT: ") && lines[1].ends_with(" sec"));
    assert!(lines[2].starts_with("[Record(id=3, ") && lines[2].ends_with(", None]"));
    assert_eq!(lines[3], "Creating dictionary...done.");
    assert_eq!(lines[4], "Locating data in dictionary... done.");
    assert_eq!(lines[6], lines[2]);
    assert_eq!(lines[7], "");
    assert!(lines[8].starts_with("Speedup from dict: ") && lines[8].ends_with('x'));
}

#[test]
fn full_run_is_reproducible() {
    let config = BenchConfig {
        record_count: 5_000,
        ..BenchConfig::default()
    };
    let mut out = Vec::new();
    let first = run(&config, &mut out).unwrap();
    let second = run(&config, &mut std::io::sink()).unwrap();

    assert_eq!(first.ids, second.ids);
    assert_eq!(first.linear, second.linear);
    assert_eq!(first.hashed, first.linear);
    assert!(first.ids.len() <= config.sample_size);
    for (id, found) in first.ids.iter().zip(first.linear.iter()) {
        match found {
            Some(record) => assert_eq!(record.id, *id),
            None => assert_eq!(*id as usize, config.record_count),
        }
    }

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with(
        "Creating data... done.\nSimulating randomized data ... done.\n"
    ));
    assert!(text.contains(&format!(
        "Creating {} interesting IDs to seek.\n",
        first.ids.len()
    )));
}

#[test]
fn duplicate_ids_are_a_mismatch() {
    let mut records = dataset(4);
    let mut dup = records[0];
    dup.x = dup.x.wrapping_add(1);
    records.push(dup);

    match compare(&records, &[dup.id], &mut std::io::sink()) {
        Err(Error::LookupMismatch { id }) => assert_eq!(id, dup.id),
        other => panic!("expected LookupMismatch, got {:?}", other),
    }
}

#[test]
#[ignore]
fn lookup_speedup_grows_with_dataset_size() {
    let ids: Vec<u32> = (0..100).map(|i| i * 10).collect();
    let mut speedups = Vec::new();
    for n in [1_000, 100_000].iter() {
        let records = dataset(*n);
        // Median of a few runs to smooth out timer noise.
        let mut runs: Vec<f64> = (0..5)
            .map(|_| compare(&records, &ids, &mut std::io::sink()).unwrap().lookup_speedup())
            .collect();
        runs.sort_by(|a, b| a.total_cmp(b));
        speedups.push(runs[2]);
    }
    assert!(speedups[1] >= speedups[0], "{:?}", speedups);
}
