//! Styling constants and runtime configuration defaults

// Base textures the level editor places before any style is applied
/// Material of an unstyled straight antline segment
pub const ANTLINE_STRAIGHT: &str = "signage/indicator_lights/indicator_lights_floor";
/// Material of an unstyled antline corner piece
pub const ANTLINE_CORNER: &str = "signage/indicator_lights/indicator_lights_corner_floor";

/// Texture scale used when a style entry leaves it unspecified
pub const DEFAULT_TEXTURE_SCALE: f64 = 0.25;

/// Scale of the builtin corner texture
pub const DEFAULT_CORNER_SCALE: f64 = 1.0;

/// Strips at or below this length are restyled whole, never fragmented
pub const SHORT_ANTLINE_LENGTH: f64 = 48.0;

/// Length of one antline cell, the granularity of fragmentation
pub const CELL_SIZE: f64 = 16.0;

/// Half-length contributed by each cell along a quad's local v axis
pub const HALF_CELL: f64 = 8.0;

/// Most cells a single strip may be cut into, one map extent of 32768 units
pub const MAX_ANTLINE_CELLS: usize = 2048;

/// Entity class holding overlay decals
pub const OVERLAY_CLASSNAME: &str = "info_overlay";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_styled";
/// Extension used for map and style documents
pub const DOCUMENT_EXTENSION: &str = "json";

/// Top-level key of a style file holding the wall style
pub const WALL_STYLE_KEY: &str = "wall";
/// Top-level key of a style file holding the floor and ceiling style
pub const FLOOR_STYLE_KEY: &str = "floor";
