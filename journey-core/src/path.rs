use std::fmt;

use crate::PathGeometry;

/// Hướng phình của một band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveDirection {
    Left,
    Right,
}

impl CurveDirection {
    pub fn for_band(index: usize) -> Self {
        if index % 2 == 0 {
            CurveDirection::Left
        } else {
            CurveDirection::Right
        }
    }
}

/// Một đoạn Bézier bậc ba phủ đúng một band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveSegment {
    pub direction: CurveDirection,
    pub control_x: i64,
    pub control_y1: i64,
    pub control_y2: i64,
    pub end_x: i64,
    pub end_y: i64,
}

/// Đường cong trang trí làm mask cho dải gradient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurvePath {
    pub start: (i64, i64),
    pub segments: Vec<CurveSegment>,
}

impl CurvePath {
    /// Chia `total_height` thành các band cố định và đổi hướng luân phiên.
    pub fn build(total_height: u32, band_size: u32, geometry: &PathGeometry) -> Self {
        let start = (geometry.center_x, geometry.start_y);
        if band_size == 0 {
            return Self {
                start,
                segments: Vec::new(),
            };
        }

        let band = i64::from(band_size);
        let bands = (total_height / band_size) as usize;
        let segments = (0..bands)
            .map(|index| {
                let y_start = index as i64 * band;
                let y_end = y_start + band;
                let direction = CurveDirection::for_band(index);
                let control_x = match direction {
                    CurveDirection::Left => geometry.left_x,
                    CurveDirection::Right => geometry.right_x,
                };
                CurveSegment {
                    direction,
                    control_x,
                    control_y1: y_start + geometry.control_inset,
                    control_y2: y_end - geometry.control_inset,
                    end_x: geometry.center_x,
                    end_y: y_end,
                }
            })
            .collect();

        Self { start, segments }
    }

    pub fn end(&self) -> (i64, i64) {
        self.segments
            .last()
            .map(|segment| (segment.end_x, segment.end_y))
            .unwrap_or(self.start)
    }
}

impl fmt::Display for CurvePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{},{} ", self.start.0, self.start.1)?;
        for segment in &self.segments {
            write!(
                f,
                "C{x},{y1} {x},{y2} {ex},{ey} ",
                x = segment.control_x,
                y1 = segment.control_y1,
                y2 = segment.control_y2,
                ex = segment.end_x,
                ey = segment.end_y,
            )?;
        }
        Ok(())
    }
}

/// Chuỗi SVG path cho chiều cao đã cho.
pub fn decorative_path(total_height: u32, band_size: u32, geometry: &PathGeometry) -> String {
    CurvePath::build(total_height, band_size, geometry).to_string()
}
