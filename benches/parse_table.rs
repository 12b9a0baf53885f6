// benches/parse_table.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use nirf_scrape::{
    core::html,
    model::RawPage,
    specs::ranking,
};

/// A 200-row page shaped like the live site: every name cell carries the
/// "More Details" link and a hidden per-parameter table.
fn synthetic_page(rows: usize) -> String {
    let mut doc = String::from(
        "<html><body><table><thead><tr><th>Institute ID</th><th>Name</th><th>City</th>\
         <th>State</th><th>Score</th><th>Rank</th></tr></thead><tbody>",
    );
    for i in 0..rows {
        doc.push_str(&format!(
            "<tr><td>IR-O-U-{i:04}</td><td>Institute Number {i}<a href=\"#\">More Details</a>\
             <div><table><tr><th>TLR</th><th>RPC</th><th>GO</th><th>OI</th><th>PR</th></tr>\
             <tr><td>{a:.2}</td><td>{b:.2}</td><td>70.00</td><td>60.00</td><td>50.00</td></tr></table></div></td>\
             <td>City {i}</td><td>State {s}</td><td>{score:.2}</td><td>{rank}</td></tr>",
            a = 90.0 - i as f64 * 0.1,
            b = 80.0 - i as f64 * 0.1,
            s = i % 30,
            score = 90.0 - i as f64 * 0.2,
            rank = i + 1,
        ));
    }
    doc.push_str("</tbody></table></body></html>");
    doc
}

fn bench_parse(c: &mut Criterion) {
    let doc = synthetic_page(200);
    let page = RawPage { category: "Overall".into(), html: doc.clone() };
    let table = html::first_table(&doc, ranking::RANK).expect("synthetic page has a table");

    c.bench_function("first_table", |b| {
        b.iter(|| {
            let t = html::first_table(black_box(&doc), ranking::RANK).expect("table");
            black_box(t.nrows())
        })
    });

    c.bench_function("normalize", |b| {
        b.iter(|| {
            let rows = ranking::normalize(black_box(&table)).expect("rank column");
            black_box(rows.len())
        })
    });

    c.bench_function("parse_page", |b| {
        b.iter(|| {
            let rows = ranking::parse_page(black_box(&page)).expect("rank column");
            black_box(rows.len())
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
