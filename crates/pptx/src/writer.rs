//! PPTX file writer implementation.

use crate::parts::*;
use deck_core::{Alignment, Deck, DeckSlide, Error, Paragraph, Result, TextBox};
use deck_core::layout::{SLIDE_HEIGHT_EMU, SLIDE_WIDTH_EMU};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fs::{self, File};
use std::io::{BufWriter, Seek, Write};
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Application name recorded in the document properties.
const APPLICATION: &str = "deck-gen";

/// First id handed out to slides in `presentation.xml`.
const FIRST_SLIDE_ID: usize = 256;

/// Writer for PPTX (Office Open XML) files.
pub struct PptxWriter {
    compression: CompressionMethod,
}

impl PptxWriter {
    /// Create a new PPTX writer using deflate compression.
    pub fn new() -> Self {
        Self {
            compression: CompressionMethod::Deflated,
        }
    }

    /// Store parts without compression.
    pub fn stored(mut self) -> Self {
        self.compression = CompressionMethod::Stored;
        self
    }

    /// Write a deck to a file, replacing any existing one.
    ///
    /// The package is staged next to `path` and only moved into place once
    /// fully written, so a failed save leaves no file behind.
    pub fn save(&self, deck: &Deck, path: &Path) -> Result<()> {
        persist(path, |out| self.write(deck, out))?;
        log::debug!("Wrote {} slides to {}", deck.len(), path.display());
        Ok(())
    }

    /// Write a deck as a PPTX package to any seekable writer.
    pub fn write<W: Write + Seek>(&self, deck: &Deck, writer: W) -> Result<W> {
        let mut zip = ZipWriter::new(writer);
        let count = deck.slides.len();

        self.add_part(&mut zip, PATH_CONTENT_TYPES, &content_types_xml(count)?)?;
        self.add_part(&mut zip, PATH_PACKAGE_RELS, &package_rels_xml()?)?;
        self.add_part(&mut zip, PATH_CORE, &core_xml(&deck.title)?)?;
        self.add_part(&mut zip, PATH_APP, &app_xml(count)?)?;
        self.add_part(&mut zip, PATH_PRESENTATION, &presentation_xml(count)?)?;
        self.add_part(&mut zip, PATH_PRESENTATION_RELS, &presentation_rels_xml(count)?)?;
        self.add_part(&mut zip, PATH_SLIDE_MASTER, SLIDE_MASTER_XML.as_bytes())?;
        self.add_part(&mut zip, PATH_SLIDE_MASTER_RELS, SLIDE_MASTER_RELS_XML.as_bytes())?;
        self.add_part(&mut zip, PATH_SLIDE_LAYOUT, SLIDE_LAYOUT_XML.as_bytes())?;
        self.add_part(&mut zip, PATH_SLIDE_LAYOUT_RELS, SLIDE_LAYOUT_RELS_XML.as_bytes())?;
        self.add_part(&mut zip, PATH_THEME, THEME_XML.as_bytes())?;

        for (idx, slide) in deck.slides.iter().enumerate() {
            let n = idx + 1;
            self.add_part(&mut zip, &slide_path(n), &slide_xml(slide)?)?;
            self.add_part(&mut zip, &slide_rels_path(n), &slide_rels_xml()?)?;
        }

        zip.finish()
            .map_err(|e| Error::ZipError(format!("Failed to finish archive: {}", e)))
    }

    /// Add one part to the archive.
    fn add_part<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        path: &str,
        content: &[u8],
    ) -> Result<()> {
        let options = FileOptions::default().compression_method(self.compression);
        zip.start_file(path, options)
            .map_err(|e| Error::ZipError(format!("Failed to add '{}': {}", path, e)))?;
        zip.write_all(content)?;
        Ok(())
    }
}

impl Default for PptxWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Sibling path a package is staged under while being written.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    path.with_file_name(name)
}

/// Run `write` against a staging file, then rename it over `path`.
fn persist<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(BufWriter<File>) -> Result<BufWriter<File>>,
{
    let staging = staging_path(path);
    let file = File::create(&staging)?;

    let result = write(BufWriter::new(file))
        .and_then(|mut out| {
            out.flush()?;
            Ok(())
        })
        .and_then(|()| fs::rename(&staging, path).map_err(Error::from));

    if let Err(e) = &result {
        log::warn!("Discarding partial output {}: {}", staging.display(), e);
        let _ = fs::remove_file(&staging);
    }
    result
}

/// Thin wrapper over `quick_xml::Writer` that maps errors into ours.
struct XmlPart {
    writer: Writer<Vec<u8>>,
}

impl XmlPart {
    fn new() -> Result<Self> {
        let mut part = Self {
            writer: Writer::new(Vec::new()),
        };
        part.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        Ok(part)
    }

    fn event(&mut self, event: Event<'_>) -> Result<()> {
        self.writer
            .write_event(event)
            .map_err(|e| Error::XmlError(e.to_string()))
    }

    fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let elem = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.event(Event::Start(elem))
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let elem = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.event(Event::Empty(elem))
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn text(&mut self, text: &str) -> Result<()> {
        self.event(Event::Text(BytesText::new(text)))
    }

    /// `<name>text</name>`
    fn text_element(&mut self, name: &str, text: &str) -> Result<()> {
        self.start(name, &[])?;
        self.text(text)?;
        self.end(name)
    }

    fn finish(self) -> Vec<u8> {
        self.writer.into_inner()
    }
}

fn content_types_xml(slide_count: usize) -> Result<Vec<u8>> {
    let mut x = XmlPart::new()?;
    x.start("Types", &[("xmlns", NS_CONTENT_TYPES)])?;
    x.empty("Default", &[("Extension", "rels"), ("ContentType", CT_RELS)])?;
    x.empty("Default", &[("Extension", "xml"), ("ContentType", CT_XML)])?;

    let fixed = [
        (PATH_PRESENTATION, CT_PRESENTATION),
        (PATH_SLIDE_MASTER, CT_SLIDE_MASTER),
        (PATH_SLIDE_LAYOUT, CT_SLIDE_LAYOUT),
        (PATH_THEME, CT_THEME),
        (PATH_CORE, CT_CORE_PROPERTIES),
        (PATH_APP, CT_EXTENDED_PROPERTIES),
    ];
    for (path, content_type) in fixed {
        let part_name = format!("/{}", path);
        x.empty(
            "Override",
            &[("PartName", part_name.as_str()), ("ContentType", content_type)],
        )?;
    }
    for n in 1..=slide_count {
        let part_name = format!("/{}", slide_path(n));
        x.empty("Override", &[("PartName", part_name.as_str()), ("ContentType", CT_SLIDE)])?;
    }

    x.end("Types")?;
    Ok(x.finish())
}

/// Write a `Relationships` part from `(id, type, target)` triples.
fn relationships_xml(rels: &[(String, &str, String)]) -> Result<Vec<u8>> {
    let mut x = XmlPart::new()?;
    x.start("Relationships", &[("xmlns", NS_PKG_RELS)])?;
    for (id, rel_type, target) in rels {
        x.empty(
            "Relationship",
            &[("Id", id.as_str()), ("Type", *rel_type), ("Target", target.as_str())],
        )?;
    }
    x.end("Relationships")?;
    Ok(x.finish())
}

fn package_rels_xml() -> Result<Vec<u8>> {
    relationships_xml(&[
        ("rId1".to_string(), REL_OFFICE_DOCUMENT, PATH_PRESENTATION.to_string()),
        ("rId2".to_string(), REL_CORE_PROPERTIES, PATH_CORE.to_string()),
        ("rId3".to_string(), REL_EXTENDED_PROPERTIES, PATH_APP.to_string()),
    ])
}

/// Relationship id of the n-th slide in `presentation.xml.rels`.
///
/// rId1 is the slide master and rId2 the theme.
fn slide_rel_id(n: usize) -> String {
    format!("rId{}", n + 2)
}

fn presentation_rels_xml(slide_count: usize) -> Result<Vec<u8>> {
    let mut rels = vec![
        (
            "rId1".to_string(),
            REL_SLIDE_MASTER,
            "slideMasters/slideMaster1.xml".to_string(),
        ),
        ("rId2".to_string(), REL_THEME, "theme/theme1.xml".to_string()),
    ];
    for n in 1..=slide_count {
        rels.push((slide_rel_id(n), REL_SLIDE, format!("slides/slide{}.xml", n)));
    }
    relationships_xml(&rels)
}

fn slide_rels_xml() -> Result<Vec<u8>> {
    relationships_xml(&[(
        "rId1".to_string(),
        REL_SLIDE_LAYOUT,
        "../slideLayouts/slideLayout1.xml".to_string(),
    )])
}

fn presentation_xml(slide_count: usize) -> Result<Vec<u8>> {
    let mut x = XmlPart::new()?;
    x.start(
        "p:presentation",
        &[
            ("xmlns:a", NS_A),
            ("xmlns:r", NS_R),
            ("xmlns:p", NS_P),
            ("saveSubsetFonts", "1"),
        ],
    )?;

    x.start("p:sldMasterIdLst", &[])?;
    x.empty("p:sldMasterId", &[("id", "2147483648"), ("r:id", "rId1")])?;
    x.end("p:sldMasterIdLst")?;

    if slide_count > 0 {
        x.start("p:sldIdLst", &[])?;
        for n in 1..=slide_count {
            let id = (FIRST_SLIDE_ID + n - 1).to_string();
            let rel = slide_rel_id(n);
            x.empty("p:sldId", &[("id", id.as_str()), ("r:id", rel.as_str())])?;
        }
        x.end("p:sldIdLst")?;
    }

    let cx = SLIDE_WIDTH_EMU.to_string();
    let cy = SLIDE_HEIGHT_EMU.to_string();
    x.empty("p:sldSz", &[("cx", cx.as_str()), ("cy", cy.as_str()), ("type", "screen4x3")])?;
    x.empty("p:notesSz", &[("cx", cy.as_str()), ("cy", cx.as_str())])?;

    x.end("p:presentation")?;
    Ok(x.finish())
}

fn core_xml(title: &str) -> Result<Vec<u8>> {
    let mut x = XmlPart::new()?;
    x.start(
        "cp:coreProperties",
        &[
            (
                "xmlns:cp",
                "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
            ),
            ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
            ("xmlns:dcterms", "http://purl.org/dc/terms/"),
            ("xmlns:dcmitype", "http://purl.org/dc/dcmitype/"),
            ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
        ],
    )?;
    x.text_element("dc:title", title)?;
    x.text_element("dc:creator", APPLICATION)?;
    x.end("cp:coreProperties")?;
    Ok(x.finish())
}

fn app_xml(slide_count: usize) -> Result<Vec<u8>> {
    let mut x = XmlPart::new()?;
    x.start(
        "Properties",
        &[(
            "xmlns",
            "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties",
        )],
    )?;
    x.text_element("Application", APPLICATION)?;
    x.text_element("Slides", &slide_count.to_string())?;
    x.end("Properties")?;
    Ok(x.finish())
}

/// Serialize one slide: solid background plus its title and body boxes.
fn slide_xml(slide: &DeckSlide) -> Result<Vec<u8>> {
    let mut x = XmlPart::new()?;
    x.start(
        "p:sld",
        &[("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P)],
    )?;
    x.start("p:cSld", &[])?;

    let background = slide.background.to_hex();
    x.start("p:bg", &[])?;
    x.start("p:bgPr", &[])?;
    x.start("a:solidFill", &[])?;
    x.empty("a:srgbClr", &[("val", background.as_str())])?;
    x.end("a:solidFill")?;
    x.empty("a:effectLst", &[])?;
    x.end("p:bgPr")?;
    x.end("p:bg")?;

    x.start("p:spTree", &[])?;
    x.start("p:nvGrpSpPr", &[])?;
    x.empty("p:cNvPr", &[("id", "1"), ("name", "")])?;
    x.empty("p:cNvGrpSpPr", &[])?;
    x.empty("p:nvPr", &[])?;
    x.end("p:nvGrpSpPr")?;
    x.start("p:grpSpPr", &[])?;
    x.start("a:xfrm", &[])?;
    x.empty("a:off", &[("x", "0"), ("y", "0")])?;
    x.empty("a:ext", &[("cx", "0"), ("cy", "0")])?;
    x.empty("a:chOff", &[("x", "0"), ("y", "0")])?;
    x.empty("a:chExt", &[("cx", "0"), ("cy", "0")])?;
    x.end("a:xfrm")?;
    x.end("p:grpSpPr")?;

    write_text_box(&mut x, &slide.title, 2, "Title 1")?;
    write_text_box(&mut x, &slide.body, 3, "TextBox 2")?;

    x.end("p:spTree")?;
    x.end("p:cSld")?;
    x.start("p:clrMapOvr", &[])?;
    x.empty("a:masterClrMapping", &[])?;
    x.end("p:clrMapOvr")?;
    x.end("p:sld")?;
    Ok(x.finish())
}

fn write_text_box(x: &mut XmlPart, text_box: &TextBox, id: u32, name: &str) -> Result<()> {
    let id = id.to_string();
    let frame = &text_box.frame;
    let (off_x, off_y) = (frame.x.to_string(), frame.y.to_string());
    let (ext_cx, ext_cy) = (frame.cx.to_string(), frame.cy.to_string());
    let wrap = if text_box.word_wrap { "square" } else { "none" };

    x.start("p:sp", &[])?;
    x.start("p:nvSpPr", &[])?;
    x.empty("p:cNvPr", &[("id", id.as_str()), ("name", name)])?;
    x.empty("p:cNvSpPr", &[("txBox", "1")])?;
    x.empty("p:nvPr", &[])?;
    x.end("p:nvSpPr")?;

    x.start("p:spPr", &[])?;
    x.start("a:xfrm", &[])?;
    x.empty("a:off", &[("x", off_x.as_str()), ("y", off_y.as_str())])?;
    x.empty("a:ext", &[("cx", ext_cx.as_str()), ("cy", ext_cy.as_str())])?;
    x.end("a:xfrm")?;
    x.start("a:prstGeom", &[("prst", "rect")])?;
    x.empty("a:avLst", &[])?;
    x.end("a:prstGeom")?;
    x.empty("a:noFill", &[])?;
    x.end("p:spPr")?;

    x.start("p:txBody", &[])?;
    x.start("a:bodyPr", &[("wrap", wrap), ("rtlCol", "0")])?;
    x.empty("a:spAutoFit", &[])?;
    x.end("a:bodyPr")?;
    x.empty("a:lstStyle", &[])?;
    if text_box.paragraphs.is_empty() {
        // txBody requires at least one paragraph
        x.empty("a:p", &[])?;
    }
    for paragraph in &text_box.paragraphs {
        write_paragraph(x, paragraph)?;
    }
    x.end("p:txBody")?;

    x.end("p:sp")
}

fn write_paragraph(x: &mut XmlPart, paragraph: &Paragraph) -> Result<()> {
    let size = (paragraph.font_size_pt * 100).to_string();
    let color = paragraph.color.to_hex();

    x.start("a:p", &[])?;

    x.start("a:pPr", &[("algn", alignment_value(paragraph.alignment))])?;
    if let Some(space) = paragraph.space_after_pt {
        let space = (space * 100).to_string();
        x.start("a:spcAft", &[])?;
        x.empty("a:spcPts", &[("val", space.as_str())])?;
        x.end("a:spcAft")?;
    }
    x.empty("a:buNone", &[])?;
    x.end("a:pPr")?;

    let mut run_attrs = vec![("lang", "en-US"), ("sz", size.as_str())];
    if paragraph.bold {
        run_attrs.push(("b", "1"));
    }
    run_attrs.push(("dirty", "0"));

    x.start("a:r", &[])?;
    x.start("a:rPr", &run_attrs)?;
    x.start("a:solidFill", &[])?;
    x.empty("a:srgbClr", &[("val", color.as_str())])?;
    x.end("a:solidFill")?;
    x.end("a:rPr")?;
    x.text_element("a:t", &paragraph.text)?;
    x.end("a:r")?;

    x.end("a:p")
}

fn alignment_value(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "l",
        Alignment::Center => "ctr",
        Alignment::Right => "r",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::{ContentStyle, DeckAssembler, RgbColor};
    use quick_xml::Reader;
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    fn sample_deck() -> Deck {
        DeckAssembler::new().assemble(
            "Slide 1:\nTitle: Tides & Moons\nHigh tide\nLow tide\n\n\
             Slide 2:\nTitle: Currents\nWarm <and> cold",
            "Ocean",
            RgbColor::new(0x12, 0x34, 0x56),
            ContentStyle::Bullets,
        )
    }

    fn write_to_archive(deck: &Deck) -> ZipArchive<Cursor<Vec<u8>>> {
        let cursor = PptxWriter::new().write(deck, Cursor::new(Vec::new())).unwrap();
        ZipArchive::new(Cursor::new(cursor.into_inner())).unwrap()
    }

    fn read_part(archive: &mut ZipArchive<Cursor<Vec<u8>>>, path: &str) -> String {
        let mut content = String::new();
        archive
            .by_name(path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    /// Collect the text of every `a:t` run, in document order.
    fn run_texts(xml: &str) -> Vec<String> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);
        let mut texts = Vec::new();
        let mut in_text = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) if e.local_name().as_ref() == b"t" => {
                    in_text = true;
                }
                Ok(Event::End(ref e)) if e.local_name().as_ref() == b"t" => {
                    in_text = false;
                }
                Ok(Event::Text(ref e)) if in_text => {
                    texts.push(e.unescape().unwrap().to_string());
                }
                Ok(Event::Eof) => break,
                Err(e) => panic!("invalid XML: {}", e),
                _ => {}
            }
        }

        texts
    }

    #[test]
    fn test_package_contains_all_parts() {
        let deck = sample_deck();
        let archive = write_to_archive(&deck);
        let names: Vec<&str> = archive.file_names().collect();

        for expected in [
            PATH_CONTENT_TYPES,
            PATH_PACKAGE_RELS,
            PATH_CORE,
            PATH_APP,
            PATH_PRESENTATION,
            PATH_PRESENTATION_RELS,
            PATH_SLIDE_MASTER,
            PATH_SLIDE_MASTER_RELS,
            PATH_SLIDE_LAYOUT,
            PATH_SLIDE_LAYOUT_RELS,
            PATH_THEME,
            "ppt/slides/slide1.xml",
            "ppt/slides/slide2.xml",
            "ppt/slides/_rels/slide1.xml.rels",
            "ppt/slides/_rels/slide2.xml.rels",
        ] {
            assert!(names.contains(&expected), "missing part {}", expected);
        }
        assert!(!names.contains(&"ppt/slides/slide3.xml"));
    }

    #[test]
    fn test_slide_text_and_escaping() {
        let deck = sample_deck();
        let mut archive = write_to_archive(&deck);

        let slide1 = read_part(&mut archive, "ppt/slides/slide1.xml");
        assert_eq!(
            run_texts(&slide1),
            vec!["Tides & Moons", "• High tide", "• Low tide"]
        );
        assert!(slide1.contains("Tides &amp; Moons"));

        let slide2 = read_part(&mut archive, "ppt/slides/slide2.xml");
        assert_eq!(run_texts(&slide2), vec!["Currents", "• Warm <and> cold"]);
    }

    #[test]
    fn test_slide_formatting() {
        let deck = sample_deck();
        let mut archive = write_to_archive(&deck);
        let slide1 = read_part(&mut archive, "ppt/slides/slide1.xml");

        assert!(slide1.contains(r#"<p:bgPr><a:solidFill><a:srgbClr val="123456"/>"#));
        assert!(slide1.contains(r#"<a:rPr lang="en-US" sz="3400" b="1" dirty="0">"#));
        assert!(slide1.contains(r#"<a:rPr lang="en-US" sz="2000" dirty="0">"#));
        assert!(slide1.contains(r#"<a:spcPts val="600"/>"#));
        assert!(slide1.contains(r#"<a:srgbClr val="FFFFFF"/>"#));
        assert!(slide1.contains(r#"<a:off x="731520" y="640080"/>"#));
        assert!(slide1.contains(r#"<a:bodyPr wrap="square" rtlCol="0">"#));
    }

    #[test]
    fn test_presentation_lists_slides_in_order() {
        let deck = sample_deck();
        let mut archive = write_to_archive(&deck);

        let presentation = read_part(&mut archive, PATH_PRESENTATION);
        assert!(presentation.contains(r#"<p:sldId id="256" r:id="rId3"/><p:sldId id="257" r:id="rId4"/>"#));
        assert!(presentation.contains(r#"<p:sldSz cx="9144000" cy="6858000" type="screen4x3"/>"#));

        let rels = read_part(&mut archive, PATH_PRESENTATION_RELS);
        assert!(rels.contains(r#"Id="rId3""#));
        assert!(rels.contains(r#"Target="slides/slide2.xml""#));

        let content_types = read_part(&mut archive, PATH_CONTENT_TYPES);
        assert!(content_types.contains(r#"PartName="/ppt/slides/slide2.xml""#));
    }

    #[test]
    fn test_document_properties() {
        let deck = sample_deck();
        let mut archive = write_to_archive(&deck);

        let core = read_part(&mut archive, PATH_CORE);
        assert!(core.contains("<dc:title>Ocean</dc:title>"));

        let app = read_part(&mut archive, PATH_APP);
        assert!(app.contains("<Slides>2</Slides>"));
    }

    #[test]
    fn test_stored_compression() {
        let deck = sample_deck();
        let cursor = PptxWriter::new()
            .stored()
            .write(&deck, Cursor::new(Vec::new()))
            .unwrap();
        let mut archive = ZipArchive::new(Cursor::new(cursor.into_inner())).unwrap();

        let file = archive.by_name(PATH_THEME).unwrap();
        assert_eq!(file.compression(), CompressionMethod::Stored);
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let deck = sample_deck();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("deck.pptx");

        let err = PptxWriter::new().save(&deck, &path).unwrap_err();
        assert!(matches!(err, Error::PersistenceError(_)));
    }

    #[test]
    fn test_save_writes_file() {
        let deck = sample_deck();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");

        PptxWriter::new().save(&deck, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(&[0x50, 0x4B, 0x03, 0x04]));
    }

    #[test]
    fn test_save_replaces_existing_file() {
        let deck = sample_deck();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");
        std::fs::write(&path, b"stale").unwrap();

        PptxWriter::new().save(&deck, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(&[0x50, 0x4B, 0x03, 0x04]));
        assert!(!staging_path(&path).exists());
    }

    #[test]
    fn test_failed_write_leaves_no_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");

        let err = persist(&path, |mut out| {
            out.write_all(b"PK\x03\x04 half a package")?;
            Err(Error::ZipError("archive broke mid-write".into()))
        })
        .unwrap_err();

        assert!(matches!(err, Error::ZipError(_)));
        assert!(!path.exists());
        assert!(!staging_path(&path).exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_staging_path_is_sibling() {
        let path = Path::new("/tmp/out/Ocean_AI_Presentation.pptx");
        assert_eq!(
            staging_path(path),
            Path::new("/tmp/out/Ocean_AI_Presentation.pptx.part")
        );
    }
}
