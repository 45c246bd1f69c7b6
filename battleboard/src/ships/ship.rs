// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

use crate::{board::BoardError, ships::ShipKind};

/// One unit of a ship's length.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Segment {
    /// 1-indexed position of this segment along its ship.
    number: usize,

    /// Whether an attack has landed on this segment.
    hit: bool,
}

impl Segment {
    /// Number of this segment within its ship, starting at 1.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Whether this segment has been hit.
    pub fn hit(&self) -> bool {
        self.hit
    }

    /// Mark the segment as hit. Repeat strikes leave it hit.
    pub(crate) fn strike(&mut self) {
        self.hit = true;
    }
}

/// A single ship of a given kind, created fresh for each game.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    kind: ShipKind,

    /// Always exactly `kind.len()` segments, numbered from 1.
    segments: Box<[Segment]>,
}

impl Ship {
    /// Construct a ship of the given kind with every segment unhit.
    pub fn new(kind: ShipKind) -> Self {
        let segments = (1..=kind.len())
            .map(|number| Segment { number, hit: false })
            .collect();
        Self { kind, segments }
    }

    /// Construct a ship from its kind's name, ignoring case. Fails with
    /// [`BoardError::InvalidShipKind`] if the name is not in the catalog.
    pub fn create(name: &str) -> Result<Self, BoardError> {
        name.parse().map(Ship::new)
    }

    /// The kind of this ship.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Length of this ship.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Display name of this ship.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Board glyph of this ship.
    pub fn glyph(&self) -> char {
        self.kind.glyph()
    }

    /// Get the `n`th segment, counting from 1. Returns `None` if `n` is outside
    /// `1..=len`.
    pub fn segment(&self, n: usize) -> Option<&Segment> {
        n.checked_sub(1).and_then(|i| self.segments.get(i))
    }

    pub(crate) fn segment_mut(&mut self, n: usize) -> Option<&mut Segment> {
        n.checked_sub(1).and_then(move |i| self.segments.get_mut(i))
    }

    /// Iterate the segments in order.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Number of segments that have been hit.
    pub fn hits(&self) -> usize {
        self.segments.iter().filter(|s| s.hit).count()
    }

    /// True if every segment has been hit.
    pub fn sunk(&self) -> bool {
        self.segments.iter().all(|s| s.hit)
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
