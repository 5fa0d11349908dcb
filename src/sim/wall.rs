//! Brick wall layout and bookkeeping
//!
//! The wall is rebuilt from scratch at the start of every run. Layout is
//! fully deterministic: one row per `BrickColor`, as many columns as fit.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::geometry::{Rect, intersects};
use super::state::{Brick, BrickColor};
use crate::consts::*;
use crate::error::SimError;
use crate::settings::Settings;

/// Brick dimensions and placement parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickLayout {
    pub brick_width: i32,
    pub brick_height: i32,
    /// Spacing between neighbouring bricks on both axes
    pub gap: i32,
    pub offset_x: i32,
    pub offset_y: i32,
    pub health: u8,
}

impl Default for BrickLayout {
    fn default() -> Self {
        Self {
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            gap: BRICK_GAP,
            offset_x: WALL_OFFSET_X,
            offset_y: WALL_OFFSET_Y,
            health: BRICK_HEALTH,
        }
    }
}

impl BrickLayout {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            brick_width: settings.brick_width,
            brick_height: settings.brick_height,
            gap: settings.brick_gap,
            offset_x: settings.wall_offset_x,
            offset_y: settings.wall_offset_y,
            health: settings.brick_health,
        }
    }

    /// Horizontal distance between the left edges of neighbouring bricks
    pub fn pitch_x(&self) -> i32 {
        self.brick_width + self.gap
    }

    pub fn pitch_y(&self) -> i32 {
        self.brick_height + self.gap
    }

    /// Number of columns that fit in an arena of the given width
    pub fn columns(&self, arena_width: i32) -> usize {
        let mut columns = 0;
        while columns as i32 * self.pitch_x() + self.brick_width + self.offset_x <= arena_width {
            columns += 1;
        }
        columns
    }
}

/// Build the initial wall for an arena of `arena_width`
pub fn build_wall(arena_width: i32, layout: &BrickLayout) -> BrickWall {
    let columns = layout.columns(arena_width);
    let mut bricks = Vec::with_capacity(columns * BrickColor::ALL.len());

    for (row, &color) in BrickColor::ALL.iter().enumerate() {
        let points = (row as u32 + 1) * ROW_POINTS;
        let y = row as i32 * layout.pitch_y() + layout.offset_y;
        for column in 0..columns {
            let x = column as i32 * layout.pitch_x() + layout.offset_x;
            let rect = Rect::new(x, y, layout.brick_width, layout.brick_height);
            bricks.push(Brick::new(rect, color, points, layout.health));
        }
    }

    log::debug!(
        "Built wall: {} rows x {} columns = {} bricks",
        BrickColor::ALL.len(),
        columns,
        bricks.len()
    );
    BrickWall { bricks }
}

/// Outcome of a single brick hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickHit {
    pub color: BrickColor,
    pub points: u32,
    pub destroyed: bool,
}

/// The live bricks of the current run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickWall {
    bricks: Vec<Brick>,
}

impl BrickWall {
    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Brick> {
        self.bricks.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Brick> {
        self.bricks.get(index)
    }

    /// Indices of every brick touching `rect`, in wall order
    pub fn overlapping(&self, rect: &Rect) -> Vec<usize> {
        self.bricks
            .iter()
            .enumerate()
            .filter(|(_, brick)| intersects(&brick.bounds(), rect))
            .map(|(i, _)| i)
            .collect()
    }

    /// Hit every listed brick once, then drop the destroyed ones.
    ///
    /// Indices refer to the wall before removal. Every index is checked before
    /// any brick is touched, so on `Err` the wall is unchanged.
    pub fn hit_all(&mut self, indices: &[usize]) -> Result<Vec<BrickHit>, SimError> {
        let len = self.bricks.len();
        let mut seen = HashSet::with_capacity(indices.len());
        for &index in indices {
            let brick = self
                .bricks
                .get(index)
                .ok_or(SimError::BrickIndexOutOfRange { index, len })?;
            if brick.is_destroyed() {
                return Err(SimError::BrickDestroyed {
                    x: brick.rect.x,
                    y: brick.rect.y,
                });
            }
            if !seen.insert(index) {
                return Err(SimError::DuplicateBrickIndex { index });
            }
        }

        let mut hits = Vec::with_capacity(indices.len());
        for &index in indices {
            let brick = &mut self.bricks[index];
            let points = brick.hit()?;
            hits.push(BrickHit {
                color: brick.color,
                points,
                destroyed: brick.is_destroyed(),
            });
        }

        self.bricks.retain(|b| !b.is_destroyed());
        Ok(hits)
    }
}

impl<'a> IntoIterator for &'a BrickWall {
    type Item = &'a Brick;
    type IntoIter = std::slice::Iter<'a, Brick>;

    fn into_iter(self) -> Self::IntoIter {
        self.bricks.iter()
    }
}

impl FromIterator<Brick> for BrickWall {
    fn from_iter<T: IntoIterator<Item = Brick>>(iter: T) -> Self {
        Self {
            bricks: iter.into_iter().collect(),
        }
    }
}
