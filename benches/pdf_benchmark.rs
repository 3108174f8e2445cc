//! Performance benchmarks for the resume parser
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lopdf::{content::Content, content::Operation, Dictionary, Document, Object, Stream};
use resume_parser::fields::{extract_email, extract_mobile, extract_name, extract_skills};
use resume_parser::pdf::PdfExtractProvider;
use resume_parser::{FallbackExtractor, ResumeParser};
use std::io::Write;

const RESUME_LINES: &[&str] = &[
    "Jane Doe",
    "Senior Software Engineer",
    "Email: jane.doe@example.com | Phone: +1 (555) 123-4567",
    "Skills: Python, Rust, React, Docker, Kubernetes, AWS, PostgreSQL",
    "Experience: built data pipelines with pandas and numpy",
];

fn resume_text(repeat: usize) -> String {
    let mut text = RESUME_LINES.join("\n");
    for i in 0..repeat {
        text.push_str(&format!("\nProject {}: machine learning services in TypeScript", i));
    }
    text
}

/// Create a synthetic resume PDF with the specified number of pages
fn create_resume_pdf(num_pages: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        ("BaseFont", Object::Name(b"Helvetica".to_vec())),
    ]));
    let resources_id = doc.add_object(Dictionary::from_iter(vec![(
        "Font",
        Object::Dictionary(Dictionary::from_iter(vec![("F1", Object::Reference(font_id))])),
    )]));

    let mut page_ids = Vec::new();
    for _ in 0..num_pages {
        let mut operations = Vec::new();
        for (i, line) in RESUME_LINES.iter().enumerate() {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new(
                "Tf",
                vec![Object::Name(b"F1".to_vec()), Object::Integer(11)],
            ));
            operations.push(Operation::new(
                "Td",
                vec![Object::Integer(72), Object::Integer(720 - 18 * i as i64)],
            ));
            operations.push(Operation::new(
                "Tj",
                vec![Object::String(
                    line.as_bytes().to_vec(),
                    lopdf::StringFormat::Literal,
                )],
            ));
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode().unwrap()));
        page_ids.push(doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ]),
            ),
            ("Resources", Object::Reference(resources_id)),
            ("Contents", Object::Reference(content_id)),
        ])));
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Count", Object::Integer(num_pages as i64)),
            (
                "Kids",
                Object::Array(page_ids.iter().map(|id| Object::Reference(*id)).collect()),
            ),
        ])),
    );
    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

/// Benchmark each field extractor on plain text
fn bench_field_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_extraction");

    for repeat in [0usize, 100, 1000] {
        let text = resume_text(repeat);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("name", repeat), &text, |b, text| {
            b.iter(|| extract_name(black_box(text)))
        });
        group.bench_with_input(BenchmarkId::new("email", repeat), &text, |b, text| {
            b.iter(|| extract_email(black_box(text)))
        });
        group.bench_with_input(BenchmarkId::new("mobile", repeat), &text, |b, text| {
            b.iter(|| extract_mobile(black_box(text)))
        });
        group.bench_with_input(BenchmarkId::new("skills", repeat), &text, |b, text| {
            b.iter(|| extract_skills(black_box(text)))
        });
    }

    group.finish();
}

/// Benchmark end-to-end parsing through the fallback provider
fn bench_parse_resume(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_resume");

    for num_pages in [1usize, 5, 20] {
        let data = create_resume_pdf(num_pages);
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(&data).unwrap();
        group.throughput(Throughput::Bytes(data.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("pdf_extract", num_pages),
            file.path(),
            |b, path| {
                b.iter(|| {
                    let extractor = FallbackExtractor::new(
                        Box::new(PdfExtractProvider::new()),
                        Box::new(PdfExtractProvider::new()),
                    );
                    let parser = ResumeParser::with_extractor(black_box(path), extractor).unwrap();
                    parser.get_extracted_data().unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_field_extraction, bench_parse_resume);
criterion_main!(benches);
