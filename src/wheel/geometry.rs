//! Sector layout derived from the value count and the configuration

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::consts::{DEFAULT_FONT_SIZE, DEFAULT_SECTOR_COLORS};

#[derive(Debug, Clone)]
pub struct SectorGeometry {
    /// Number of sectors (labels) on the wheel
    value_count: usize,
    /// Angular width of one sector
    sector_angle: f64,
    /// Fill palette, never empty
    colors: Vec<String>,
    /// Tick marks per sector, at least 1
    ticks_per_sector: u32,
    /// Label size in pixels
    pub font_size: f64,
}

impl Default for SectorGeometry {
    fn default() -> Self {
        let mut geometry = Self {
            value_count: 0,
            sector_angle: TAU,
            colors: Vec::new(),
            ticks_per_sector: 1,
            font_size: DEFAULT_FONT_SIZE,
        };
        geometry.set_sector_colors(&[]);
        geometry
    }
}

impl SectorGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the sector width for a new value count
    pub fn prepare(&mut self, value_count: usize) {
        self.value_count = value_count;
        self.sector_angle = TAU / value_count.max(1) as f64;
    }

    /// Replace the palette. An empty list, or one whose first entry is blank,
    /// selects the default palette.
    pub fn set_sector_colors(&mut self, colors: &[String]) {
        self.colors.clear();
        match colors.first() {
            Some(first) if !first.is_empty() => self.colors.extend_from_slice(colors),
            _ => self
                .colors
                .extend(DEFAULT_SECTOR_COLORS.iter().map(|c| c.to_string())),
        }
    }

    /// Set the tick density, clamped to at least one tick per sector
    pub fn set_ticks_per_sector(&mut self, ticks: i32) {
        self.ticks_per_sector = ticks.max(1) as u32;
    }

    #[inline]
    pub fn value_count(&self) -> usize {
        self.value_count
    }

    #[inline]
    pub fn sector_angle(&self) -> f64 {
        self.sector_angle
    }

    #[inline]
    pub fn ticks_per_sector(&self) -> u32 {
        self.ticks_per_sector
    }

    /// Angular distance between two tick marks
    #[inline]
    pub fn tick_angle(&self) -> f64 {
        self.sector_angle / self.ticks_per_sector as f64
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Palette index for a sector.
    ///
    /// Colors cycle through the palette, except that the last sector of a
    /// multi-sector wheel never reuses the first sector's color when the
    /// palette has a choice, since the two are adjacent.
    pub fn color_index(&self, sector: usize) -> usize {
        let len = self.colors.len();
        let mut index = sector % len;
        if self.value_count > 1 && sector == self.value_count - 1 && index == 0 && len > 1 {
            index += 1;
        }
        index
    }

    /// Fill color for a sector
    pub fn sector_color(&self, sector: usize) -> &str {
        &self.colors[self.color_index(sector)]
    }

    /// Rotation applied before sector 0 is drawn. A lone sector is turned away
    /// from the indicator; otherwise sector 0 starts at the top.
    pub fn start_offset(&self) -> f64 {
        if self.value_count == 1 { PI } else { -FRAC_PI_2 }
    }
}
