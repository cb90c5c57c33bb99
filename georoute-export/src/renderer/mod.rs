//! `PdfItineraryRenderer` implementation backed by `lopdf`.

#![expect(
    clippy::float_arithmetic,
    reason = "layout offsets and image scaling are computed in PDF points"
)]

use georoute_core::{
    ItineraryRenderer, ItineraryRequest, Point, RenderError, RouteLeg, RouteMode,
};
use jiff::civil::Date;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, dictionary};

use crate::layout::{Cell, Font, PageWriter, TextStyle};
use crate::settings::{self, ExportSettings};
use crate::snapshot::MapImage;
use crate::text::{format_duration, win_ansi};

const BLACK: [f32; 3] = [0.0, 0.0, 0.0];
const MUTED: [f32; 3] = [0.38, 0.38, 0.38];
const LIGHT: [f32; 3] = [0.62, 0.62, 0.62];
const RULE: [f32; 3] = [0.88, 0.88, 0.88];
const TITLE_BLUE: [f32; 3] = [0.08, 0.40, 0.75];
const ACCENT_BLUE: [f32; 3] = [0.13, 0.59, 0.95];

const TITLE: TextStyle = TextStyle::new(Font::Bold, 24.0, TITLE_BLUE);
const SUBTITLE: TextStyle = TextStyle::new(Font::Regular, 14.0, MUTED);
const META: TextStyle = TextStyle::new(Font::Regular, 10.0, LIGHT);
const HEADING: TextStyle = TextStyle::new(Font::Bold, 14.0, BLACK);
const LABEL: TextStyle = TextStyle::new(Font::Regular, 10.0, MUTED);
const FIGURE: TextStyle = TextStyle::new(Font::Bold, 16.0, BLACK);
const STOP_NAME: TextStyle = TextStyle::new(Font::Bold, 11.0, BLACK);
const STOP_NUMBER: TextStyle = TextStyle::new(Font::Bold, 12.0, ACCENT_BLUE);
const DETAIL: TextStyle = TextStyle::new(Font::Regular, 9.0, MUTED);
const LEG: TextStyle = TextStyle::new(Font::Regular, 9.0, ACCENT_BLUE);
const RETURN: TextStyle = TextStyle::new(Font::Regular, 10.0, MUTED);
const FOOTER: TextStyle = TextStyle::new(Font::Regular, 9.0, LIGHT);

/// Indent of stop names, leaving room for the stop number.
const STOP_INDENT: f32 = 30.0;
/// Tallest a map snapshot may be drawn.
const MAX_IMAGE_HEIGHT: f32 = 320.0;
/// Resource name of the map snapshot XObject.
const MAP_IMAGE: &str = "Im1";

/// Renders itineraries as paginated PDF documents.
///
/// Text uses the standard Helvetica faces, so characters outside Latin-1 are
/// printed as `?`. A map snapshot in any format the `image` crate reads is
/// embedded; one that cannot be decoded is skipped with a warning.
///
/// # Examples
/// ```
/// use georoute_core::{ItineraryRenderer, ItineraryRequest};
/// use georoute_export::PdfItineraryRenderer;
///
/// let pdf = PdfItineraryRenderer::new().render(&ItineraryRequest::default())?;
/// assert!(pdf.starts_with(b"%PDF"));
/// # Ok::<(), georoute_core::RenderError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PdfItineraryRenderer {
    settings: Option<ExportSettings>,
    generated_on: Option<Date>,
}

impl PdfItineraryRenderer {
    /// Construct a renderer that reads the process-wide settings.
    ///
    /// See [`init`](crate::init).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a renderer with its own settings.
    #[must_use]
    pub const fn with_settings(settings: ExportSettings) -> Self {
        Self {
            settings: Some(settings),
            generated_on: None,
        }
    }

    /// Print `date` as the generation date instead of today's date.
    #[must_use]
    pub fn generated_on(mut self, date: Date) -> Self {
        self.generated_on = Some(date);
        self
    }

    fn settings(&self) -> &ExportSettings {
        self.settings.as_ref().unwrap_or_else(|| settings::global())
    }
}

impl ItineraryRenderer for PdfItineraryRenderer {
    fn render(&self, request: &ItineraryRequest) -> Result<Vec<u8>, RenderError> {
        let settings = self.settings();
        let (width, height) = settings.page_size.dimensions();
        let date = self
            .generated_on
            .unwrap_or_else(|| jiff::Zoned::now().date());
        let image = request.map_image_base64.as_deref().and_then(decode_map_image);

        let mut writer = PageWriter::new(f32::from(width), f32::from(height));
        compose_header(&mut writer, &settings.title, request.route.route_mode, date);
        if let Some(map) = &image {
            compose_map(&mut writer, map);
        }
        compose_summary(&mut writer, request);
        compose_itinerary(&mut writer, request);

        let pages = writer.finish(FOOTER, |page, total| {
            format!("Generated by {} - page {page} / {total}", settings.title)
        });
        log::debug!(
            "rendered itinerary with {} stops on {} pages",
            request.route.len(),
            pages.len()
        );
        build_document(settings, pages, image)
    }
}

fn decode_map_image(payload: &str) -> Option<MapImage> {
    if payload.trim().is_empty() {
        return None;
    }
    match MapImage::decode(payload) {
        Ok(image) if image.width > 0 && image.height > 0 => Some(image),
        Ok(_) => {
            log::warn!("skipping map image with zero size");
            None
        }
        Err(err) => {
            log::warn!("skipping map image: {err}");
            None
        }
    }
}

fn compose_header(writer: &mut PageWriter, title: &str, mode: RouteMode, date: Date) {
    writer.paragraph(0.0, title, TITLE);
    writer.paragraph(0.0, "Your Travel Itinerary", SUBTITLE);
    writer.gap(6.0);
    writer.split_row(&format!("Mode: {mode}"), &format!("Generated: {date}"), META);
    writer.rule(RULE);
    writer.gap(14.0);
}

fn compose_map(writer: &mut PageWriter, image: &MapImage) {
    let aspect = f32::from(image.height) / f32::from(image.width);
    let mut width = writer.content_width();
    let mut height = width * aspect;
    if height > MAX_IMAGE_HEIGHT {
        height = MAX_IMAGE_HEIGHT;
        width = height / aspect;
    }
    writer.image(MAP_IMAGE, width, height);
    writer.gap(15.0);
}

fn compose_summary(writer: &mut PageWriter, request: &ItineraryRequest) {
    let column = writer.content_width() / 4.0;
    let stops = request.route.len().to_string();
    let mode = request.route.route_mode.to_string();
    let mut figures = vec![("Stops", stops), ("Mode", mode)];
    if let Some(metrics) = &request.metrics {
        figures.push(("Distance", format!("{:.1} km", metrics.total_distance_km)));
        figures.push(("Duration", format_duration(metrics.total_duration_min)));
    }

    let mut offset = 0.0;
    let mut labels = Vec::with_capacity(figures.len());
    let mut values = Vec::with_capacity(figures.len());
    for (label, value) in &figures {
        labels.push(Cell {
            offset,
            text: label,
            style: LABEL,
        });
        values.push(Cell {
            offset,
            text: value,
            style: FIGURE,
        });
        offset += column;
    }

    writer.reserve(80.0);
    writer.paragraph(0.0, "Trip Summary", HEADING);
    writer.gap(6.0);
    writer.row(&labels);
    writer.row(&values);
    writer.gap(20.0);
}

fn compose_itinerary(writer: &mut PageWriter, request: &ItineraryRequest) {
    let sequence = &request.route.sequence;
    let start = request.start_location.as_ref();
    let points = request.point_index();

    writer.reserve(60.0);
    writer.paragraph(0.0, "Itinerary", HEADING);

    if let Some(start) = start {
        writer.gap(6.0);
        writer.paragraph(STOP_INDENT, &start.name, STOP_NAME);
        writer.paragraph(STOP_INDENT, "Starting Point", DETAIL);
        writer.paragraph(STOP_INDENT, &coordinates(start), DETAIL);
        if let Some(first_id) = sequence.first() {
            let first_name = points.get(first_id).map(|p| p.name.as_str());
            let to = ids_and_names(first_id, first_name);
            let leg = request
                .metrics
                .as_ref()
                .and_then(|m| m.find_leg(&[start.name.as_str()], &to));
            write_leg(writer, leg);
        }
    }

    let mut number = 0_usize;
    for (index, id) in sequence.iter().enumerate() {
        let Some(point) = points.get(id) else {
            log::debug!("skipping unknown stop {id}");
            continue;
        };
        number += 1;
        let label = format!("{number}.");

        writer.gap(6.0);
        writer.reserve(36.0);
        writer.labelled(
            Cell {
                offset: 0.0,
                text: &label,
                style: STOP_NUMBER,
            },
            STOP_INDENT,
            &point.name,
            STOP_NAME,
        );
        writer.paragraph(STOP_INDENT, &coordinates(point), DETAIL);

        let Some(metrics) = &request.metrics else {
            continue;
        };
        let from = ids_and_names(id, Some(point.name.as_str()));
        let leg = match sequence.get(index + 1) {
            Some(next_id) => {
                let next_name = points.get(next_id).map(|p| p.name.as_str());
                metrics.find_leg(&from, &ids_and_names(next_id, next_name))
            }
            None => start
                .filter(|_| request.route.route_mode.returns_to_start())
                .and_then(|s| metrics.find_leg(&from, &[s.name.as_str()])),
        };
        write_leg(writer, leg);
    }

    if let Some(start) = start.filter(|_| request.route.route_mode.returns_to_start()) {
        writer.gap(8.0);
        writer.paragraph(STOP_INDENT, &format!("Return to {}", start.name), RETURN);
    }
}

fn ids_and_names<'a>(id: &'a str, name: Option<&'a str>) -> Vec<&'a str> {
    std::iter::once(id).chain(name).collect()
}

fn write_leg(writer: &mut PageWriter, leg: Option<&RouteLeg>) {
    if let Some(leg) = leg {
        let text = format!(
            "{:.1} km - {}",
            leg.distance_km,
            format_duration(leg.duration_min)
        );
        writer.gap(2.0);
        writer.paragraph(STOP_INDENT, &text, LEG);
    }
}

fn coordinates(point: &Point) -> String {
    format!("{:.4}, {:.4}", point.lat, point.lng)
}

fn font_dictionary(font: Font) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => font.base_font(),
        "Encoding" => "WinAnsiEncoding",
    }
}

fn build_document(
    settings: &ExportSettings,
    pages: Vec<Vec<Operation>>,
    image: Option<MapImage>,
) -> Result<Vec<u8>, RenderError> {
    let (width, height) = settings.page_size.dimensions();
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(font_dictionary(Font::Regular));
    let bold_id = doc.add_object(font_dictionary(Font::Bold));
    let mut resources = dictionary! {
        "Font" => dictionary! {
            Font::Regular.resource() => regular_id,
            Font::Bold.resource() => bold_id,
        },
    };
    if let Some(map) = image {
        let image_id = doc.add_object(map.stream);
        resources.set("XObject", dictionary! { MAP_IMAGE => image_id });
    }
    let resources_id = doc.add_object(resources);

    let mut kids = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations }
            .encode()
            .map_err(|err| RenderError::Encode(err.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, content));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::from(page_id));
    }

    let count = i64::try_from(kids.len()).map_err(|err| RenderError::Encode(err.to_string()))?;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0_i64.into(),
                0_i64.into(),
                i64::from(width).into(),
                i64::from(height).into(),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(win_ansi(&settings.title)),
        "Producer" => Object::string_literal(win_ansi(&settings.producer)),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|err| RenderError::Write(err.to_string()))?;
    Ok(bytes)
}
