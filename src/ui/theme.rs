//! Theme constants for the Caro GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135); // Burlywood
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 40, 20);
pub const STAR_POINT: Color32 = Color32::from_rgb(50, 35, 20);

// X stones dark, O stones light
pub const X_STONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const X_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const O_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const O_STONE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Explosion effect
pub const EXPLOSION_CORE: Color32 = Color32::from_rgb(255, 170, 40);
pub const EXPLOSION_RING: Color32 = Color32::from_rgb(255, 60, 30);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 100)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer / status colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 40.0;
pub const STONE_RADIUS_RATIO: f32 = 0.45;
pub const STAR_POINT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;

/// Star points (0-indexed): center, plus the 4-4 corners on boards of 13 and up
pub fn star_points(size: usize) -> Vec<(u8, u8)> {
    let center = (size / 2) as u8;
    if size < 13 {
        return vec![(center, center)];
    }
    let near = 3u8;
    let far = (size - 4) as u8;
    vec![(near, near), (near, far), (center, center), (far, near), (far, far)]
}
