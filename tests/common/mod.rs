use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// Build a PDF with one page per entry; each string becomes its own `Tj` text run.
pub fn pdf_with_pages(pages: &[&[&str]]) -> Vec<u8> {
    let pages = pages
        .iter()
        .map(|runs| {
            runs.iter()
                .map(|run| Operation::new("Tj", vec![Object::string_literal(*run)]))
                .collect()
        })
        .collect();
    pdf_from_operations(pages, false)
}

/// Build a PDF with one page per entry, wrapping each page's operations in `BT .. ET`.
///
/// With `compress`, every content stream is Flate-encoded.
pub fn pdf_from_operations(pages: Vec<Vec<Operation>>, compress: bool) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for page_ops in pages {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
        ];
        operations.extend(page_ops);
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let mut stream = Stream::new(dictionary! {}, content.encode().unwrap());
        if compress {
            let _ = stream.compress();
        }
        let content_id = doc.add_object(stream);
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::new();
    doc.save_to(&mut out).unwrap();
    out
}
