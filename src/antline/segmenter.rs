//! Restyling of antline overlays
//!
//! [`style_antline`] retextures one overlay from a style. Long strips in a
//! style with a nonzero breakage chance are cut into runs of broken and
//! intact cells, each run becoming a new overlay that replaces the original.
//! [`style_all_antlines`] drives this over every overlay of a document.

use log::{debug, info, warn};

use crate::antline::random::RandomSelector;
use crate::antline::runs::{Run, broken_antline_iter};
use crate::io::configuration::{
    CELL_SIZE, HALF_CELL, MAX_ANTLINE_CELLS, OVERLAY_CLASSNAME, SHORT_ANTLINE_LENGTH,
};
use crate::io::error::{Result, StyleError, invalid_field};
use crate::io::progress::ProgressManager;
use crate::math::vector::{Axis, Vec3};
use crate::spatial::document::MapDocument;
use crate::spatial::entity::{Entity, EntityId};
use crate::spatial::overlay::{
    BASIS_ORIGIN, CORNER_KEYS, MATERIAL, START_V, is_horizontal, overlay_bounds,
    set_half_length,
};
use crate::style::definition::{AntlineShape, StyleDefinition, StyleSet};
use crate::style::texture::TextureEntry;

/// Direction an unrotated antline runs along
const LENGTHWISE: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// What happened to a single overlay
#[derive(Clone, Debug, PartialEq)]
pub enum StyleOutcome {
    /// The overlay was retextured in place
    Restyled {
        /// Material now on the overlay
        texture: String,
        /// Whether a broken texture was chosen
        broken: bool,
    },
    /// The overlay was removed and replaced by one overlay per run
    Fragmented {
        /// Runs in order along the strip
        runs: Vec<Run>,
        /// Ids of the replacement overlays, one per run
        created: Vec<EntityId>,
    },
}

/// How a batch reacts to an overlay that cannot be styled
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailureMode {
    /// Abort the batch on the first failure
    Strict,
    /// Log the failure, leave the overlay untouched and continue
    #[default]
    Lenient,
}

/// Totals for a batch run over a document
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StyleReport {
    /// Overlays retextured in place
    pub restyled: usize,
    /// Overlays replaced by fragments
    pub fragmented: usize,
    /// Fragment overlays created
    pub created: usize,
    /// Overlays left untouched after a failure
    pub skipped: usize,
}

/// Geometry of an overlay that is long enough to fragment
struct Strip {
    length: f64,
    long_axis: Axis,
}

impl Strip {
    fn measure(overlay: &Entity) -> Result<Self> {
        let (min, max) = overlay_bounds(overlay)?;
        let length = (max - min).max_component();
        if !length.is_finite() || length > MAX_ANTLINE_CELLS as f64 * CELL_SIZE {
            let [first_corner, ..] = CORNER_KEYS;
            return Err(invalid_field(
                overlay.id,
                first_corner,
                &overlay.get(first_corner).unwrap_or_default(),
                &format!("strip length {length} exceeds {MAX_ANTLINE_CELLS} cells"),
            ));
        }
        let long_axis = overlay.angles("angles")?.rotate(LENGTHWISE).dominant_axis();
        Ok(Self { length, long_axis })
    }

    /// Whole cells along the strip
    fn cell_count(&self) -> usize {
        (self.length / CELL_SIZE).floor() as usize
    }
}

fn choose_texture<'a>(
    rng: &mut RandomSelector,
    style: &'a StyleDefinition,
    shape: AntlineShape,
    broken: bool,
) -> Result<&'a TextureEntry> {
    rng.choose(style.textures(shape, broken))
        .ok_or(StyleError::EmptyTextureList {
            shape: shape.name(),
            broken,
        })
}

/// Restyle one antline overlay
///
/// The overlay is chosen from `floor_config` when it lies on a floor or
/// ceiling and `floor_config` is given, otherwise from `config`. All random
/// choices come from a stream seeded by the overlay's `origin`, so the same
/// overlay and styles always give the same result.
///
/// # Errors
///
/// Returns an error if the overlay does not exist, its material is not an
/// antline texture, its geometry fields are unusable, or the style has no
/// texture for the chosen variant. The document is left unchanged on error.
pub fn style_antline(
    document: &mut MapDocument,
    overlay_id: EntityId,
    config: &StyleDefinition,
    floor_config: Option<&StyleDefinition>,
) -> Result<StyleOutcome> {
    let overlay = document.require(overlay_id)?;
    let mut rng = RandomSelector::from_origin(overlay.require("origin")?);

    let style = match floor_config {
        Some(floor) if is_horizontal(overlay)? => floor,
        _ => config,
    };

    let shape = AntlineShape::from_material(overlay.get(MATERIAL).unwrap_or_default())?;

    let mut broken = false;
    if style.broken_chance() != 0.0 {
        let strip = Strip::measure(overlay)?;
        if strip.length <= SHORT_ANTLINE_LENGTH {
            broken = rng.chance(style.broken_chance());
        } else {
            return fragment(document, overlay_id, style, shape, &strip, &mut rng);
        }
    }

    let entry = choose_texture(&mut rng, style, shape, broken)?;
    let overlay = document
        .get_mut(overlay_id)
        .ok_or(StyleError::MissingEntity { id: overlay_id })?;
    entry.apply(overlay);
    debug!(
        "Overlay {overlay_id}: {} -> {}{}",
        shape.name(),
        entry.texture,
        if broken { " (broken)" } else { "" }
    );

    Ok(StyleOutcome::Restyled {
        texture: entry.texture.clone(),
        broken,
    })
}

/// Replace an overlay by one copy per broken/intact run
fn fragment(
    document: &mut MapDocument,
    overlay_id: EntityId,
    style: &StyleDefinition,
    shape: AntlineShape,
    strip: &Strip,
    rng: &mut RandomSelector,
) -> Result<StyleOutcome> {
    let original = document.require(overlay_id)?;

    let mut min_origin = original.vec("origin")?;
    min_origin[strip.long_axis] -= strip.length / 2.0;

    let runs = broken_antline_iter(strip.cell_count(), style.broken_chance(), rng);

    // Build every fragment before touching the document
    let mut fragments = Vec::with_capacity(runs.len());
    for run in &runs {
        let mut fragment = original.clone();
        fragment.id = 0;
        fragment.set(START_V, run.len());

        let mut origin = min_origin;
        origin[strip.long_axis] += run.center() * CELL_SIZE;
        fragment.set_vec("origin", origin);
        fragment.set_vec(BASIS_ORIGIN, origin);

        set_half_length(&mut fragment, HALF_CELL * run.len() as f64)?;
        choose_texture(rng, style, shape, run.is_broken)?.apply(&mut fragment);
        fragments.push(fragment);
    }

    document.remove(overlay_id);
    let created: Vec<EntityId> = fragments
        .into_iter()
        .map(|fragment| document.insert(fragment))
        .collect();

    debug!(
        "Overlay {overlay_id}: {} of length {} along {} split into {} runs {:?}",
        shape.name(),
        strip.length,
        strip.long_axis,
        runs.len(),
        runs.iter()
            .map(|run| (run.start, run.end, run.is_broken))
            .collect::<Vec<_>>()
    );

    Ok(StyleOutcome::Fragmented { runs, created })
}

/// Restyle every overlay in a document
///
/// Ids are snapshotted up front, so fragments created along the way are
/// never styled twice.
///
/// # Errors
///
/// In [`FailureMode::Strict`] returns the first overlay error. Lenient
/// batches never fail.
pub fn style_all_antlines(
    document: &mut MapDocument,
    styles: &StyleSet,
    mode: FailureMode,
    mut progress: Option<&mut ProgressManager>,
) -> Result<StyleReport> {
    let overlay_ids = document.ids_by_class(OVERLAY_CLASSNAME);
    if let Some(pm) = progress.as_deref_mut() {
        pm.initialize(overlay_ids.len());
    }

    let mut report = StyleReport::default();
    for overlay_id in overlay_ids {
        match style_antline(document, overlay_id, &styles.wall, styles.floor.as_ref()) {
            Ok(StyleOutcome::Restyled { .. }) => report.restyled += 1,
            Ok(StyleOutcome::Fragmented { created, .. }) => {
                report.fragmented += 1;
                report.created += created.len();
            }
            Err(error) if mode == FailureMode::Lenient => {
                warn!("Skipping overlay {overlay_id}: {error}");
                report.skipped += 1;
            }
            Err(error) => return Err(error),
        }

        if let Some(pm) = progress.as_deref_mut() {
            pm.advance();
        }
    }

    if let Some(pm) = progress {
        pm.finish();
    }

    info!(
        "Styled {} overlays in place, fragmented {} into {} overlays, skipped {}",
        report.restyled, report.fragmented, report.created, report.skipped
    );
    Ok(report)
}
