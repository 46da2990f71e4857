use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use domain::{DonutCounts, DonutKind, DonutShop};

fn bench_parse_descriptor(c: &mut Criterion) {
    c.bench_function("domain/parse_descriptor", |b| {
        b.iter(|| DonutCounts::parse("BC:6,P:2,B:2,OF:2,G:10,BA:1,J:3,VF:4,CG:5").unwrap());
    });
}

fn bench_deliver_order(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

    c.bench_function("domain/deliver_order", |b| {
        let mut shop = DonutShop::new();
        for kind in DonutKind::ALL {
            shop.restock(kind, 10);
        }
        b.iter(|| {
            shop.deliver_order("Donnie Dapper", date, "BC:6,P:2,B:2,OF:2,G:10")
                .unwrap();
        });
    });
}

fn bench_deliver_with_backfill(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

    c.bench_function("domain/deliver_order_backfill", |b| {
        b.iter(|| {
            let mut shop = DonutShop::new();
            shop.deliver_order("Big Party", date, "BC:400,G:400,J:400")
                .unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_parse_descriptor,
    bench_deliver_order,
    bench_deliver_with_backfill
);
criterion_main!(benches);
