//! Benchmarks for structure tree to HTML conversion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tagged_html::fonts::{FontDescriptor, FontFlags, FontWeight};
use tagged_html::structure::{
    AttributeKind, AttributeValue, MarkedContent, StructElem, StructTreeRoot, StructType, TextRun,
};
use tagged_html::{HtmlOptions, TaggedDocument};

fn styled_paragraph(i: usize) -> StructElem {
    let font = FontDescriptor::new(FontFlags::SERIF, Some(FontWeight::Normal));
    StructElem::new(StructType::P)
        .with_attribute(AttributeKind::TextAlign, AttributeValue::name("Justify"))
        .with_child(MarkedContent::from_runs(vec![
            TextRun::new(format!("Paragraph {} & <friends> ", i), Some(font.clone())),
            TextRun::new("plain tail", None),
        ]))
}

fn table(rows: usize) -> StructElem {
    let mut table = StructElem::new(StructType::Table);
    for r in 0..rows {
        let mut row = StructElem::new(StructType::TR);
        for c in 0..4 {
            row.add_child(
                StructElem::new(StructType::TD)
                    .with_attribute(AttributeKind::ColSpan, AttributeValue::Number(1.0))
                    .with_child(MarkedContent::from_runs(vec![TextRun::new(
                        format!("{}:{}", r, c),
                        None,
                    )]))
                    .into(),
            );
        }
        table.add_child(row.into());
    }
    table
}

fn sections(count: usize) -> TaggedDocument {
    let mut tree = StructTreeRoot::new();
    for s in 0..count {
        let mut sect = StructElem::new(StructType::Sect)
            .with_child(StructElem::new(StructType::H2).with_child(MarkedContent::from_runs(vec![
                TextRun::new(format!("Section {}", s), None),
            ])));
        for p in 0..10 {
            sect.add_child(styled_paragraph(p).into());
        }
        let mut list = StructElem::new(StructType::L)
            .with_attribute(AttributeKind::ListNumbering, AttributeValue::name("Decimal"));
        for i in 0..5 {
            list.add_child(StructElem::new(StructType::LI).with_child(styled_paragraph(i)).into());
        }
        sect.add_child(list.into());
        sect.add_child(table(8).into());
        tree.add_root_element(sect);
    }
    TaggedDocument::new().with_title("Benchmark").with_structure_tree(tree)
}

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("html_conversion");
    let options = HtmlOptions::default();

    for count in [10, 100, 1000] {
        let doc = sections(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &doc, |b, doc| {
            b.iter(|| doc.to_html(black_box(&options)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_conversion);
criterion_main!(benches);
