//! Flips and quarter-turn rotations
//!
//! Each operation fills three freshly allocated planes and only then moves
//! them into the image, so a failed allocation leaves the image untouched.

use crate::codec::Result;
use crate::image::Image;
use crate::plane::Plane;

/// Copy every sample of `image` to `dest(row, col)` in new planes of size
/// `new_rows`×`new_cols`, then swap the new planes in.
fn remap<F>(image: &mut Image, new_rows: usize, new_cols: usize, dest: F) -> Result<()>
where
    F: Fn(usize, usize) -> (usize, usize),
{
    let mut red = Plane::new(new_rows, new_cols)?;
    let mut green = Plane::new(new_rows, new_cols)?;
    let mut blue = Plane::new(new_rows, new_cols)?;

    for row in 0..image.rows() {
        for col in 0..image.cols() {
            let (new_row, new_col) = dest(row, col);
            let [r, g, b] = image.pixel(row, col);
            red.set(new_row, new_col, r);
            green.set(new_row, new_col, g);
            blue.set(new_row, new_col, b);
        }
    }

    image.replace_planes(red, green, blue);
    Ok(())
}

/// `new[r][c] = old[rows-1-r][c]`
pub fn flip_x(image: &mut Image) -> Result<()> {
    let (rows, cols) = (image.rows(), image.cols());
    remap(image, rows, cols, |r, c| (rows - 1 - r, c))
}

/// `new[r][c] = old[r][cols-1-c]`
pub fn flip_y(image: &mut Image) -> Result<()> {
    let (rows, cols) = (image.rows(), image.cols());
    remap(image, rows, cols, |r, c| (r, cols - 1 - c))
}

/// `new[c][rows-1-r] = old[r][c]`; the result is `cols`×`rows`.
pub fn rotate_cw(image: &mut Image) -> Result<()> {
    let (rows, cols) = (image.rows(), image.cols());
    remap(image, cols, rows, |r, c| (c, rows - 1 - r))
}

/// `new[cols-1-c][r] = old[r][c]`; the result is `cols`×`rows`.
pub fn rotate_ccw(image: &mut Image) -> Result<()> {
    let (rows, cols) = (image.rows(), image.cols());
    remap(image, cols, rows, |r, c| (cols - 1 - c, r))
}
