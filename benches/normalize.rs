// benches/normalize.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use std::collections::HashMap;

use htec_map::normalize::normalize;
use htec_map::select::select;
use htec_map::domain::{Level, Selection, Sex, Unit};
use htec_map::specs::dataset::parse_tsv;

/// Synthetic wide table roughly the shape of htec_emp_reg2:
/// 6 (sex × unit) rows per geo over 14 year columns.
fn synthetic_tsv(geos: &[String]) -> String {
    let years: Vec<String> = (2008..=2021).map(|y| format!("{y} ")).collect();
    let mut out = format!("freq,nace_r2,sex,unit,geo\\TIME_PERIOD\t{}\n", years.join("\t"));
    for geo in geos {
        for sex in ["F", "M", "T"] {
            for unit in ["PC_EMP", "THS"] {
                let cells: Vec<String> = (2008..=2021)
                    .map(|y| if y % 7 == 0 { String::from(": ") } else { format!("{}.5 ", y % 10) })
                    .collect();
                out.push_str(&format!("A,HTC,{sex},{unit},{geo}\t{}\n", cells.join("\t")));
            }
        }
    }
    out
}

fn synthetic_geos() -> Vec<String> {
    // ~ 30 countries + 100 NUTS-1 + 250 NUTS-2 worth of codes
    let mut geos = Vec::new();
    for a in b'A'..=b'Z' {
        geos.push(format!("A{}", a as char));
    }
    for a in b'A'..=b'Z' {
        for d in 1..=4 {
            geos.push(format!("A{}{d}", a as char));
        }
    }
    for a in b'A'..=b'M' {
        for d in 1..=2 {
            for e in 0..=9 {
                geos.push(format!("A{}{d}{e}", a as char));
            }
        }
    }
    geos
}

fn bench_pipeline(c: &mut Criterion) {
    let geos = synthetic_geos();
    let text = synthetic_tsv(&geos);
    let locations: HashMap<String, String> =
        geos.iter().map(|g| (g.clone(), format!("Region {g}"))).collect();

    c.bench_function("parse_tsv", |b| {
        b.iter(|| {
            let raw = parse_tsv(black_box(&text)).unwrap();
            black_box(raw.rows.len())
        })
    });

    let raw = parse_tsv(&text).unwrap();
    c.bench_function("normalize", |b| {
        b.iter(|| {
            let obs = normalize(black_box(&raw), black_box(&locations)).unwrap();
            black_box(obs.len())
        })
    });

    let obs = normalize(&raw, &locations).unwrap();
    let sel = Selection {
        year: 2021,
        level: Level::Nuts2,
        sex: Sex::Total,
        unit: Unit::Percent,
    };
    c.bench_function("select", |b| {
        b.iter(|| {
            let ix = select(black_box(&obs), black_box(&sel));
            black_box(ix.len())
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
