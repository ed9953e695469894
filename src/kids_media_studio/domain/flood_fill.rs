use crate::domain::error::DomainError;
use crate::domain::fill_request::FillRequest;
use crate::domain::image::RasterImage;

/// Scan-line flood fill over the 4-connected region of the seed's colour.
///
/// Matching is exact equality on R, G and B; alpha is ignored when matching
/// and forced to 255 on every repainted pixel. Returns the number of pixels
/// repainted, which is 0 when the seed already has the target colour.
///
/// Each column run is walked top to bottom. `reach_left`/`reach_right` make
/// sure only one coordinate is pushed per contiguous neighbouring run, so the
/// stack stays bounded without a visited set.
pub fn flood_fill(image: &mut RasterImage, request: &FillRequest) -> Result<usize, DomainError> {
    let (seed_x, seed_y) = image.locate(request.seed)?;
    let width = image.width() as usize;
    let height = image.height() as usize;

    let start = image.rgb_at(seed_x, seed_y);
    let target = request.target_color;
    if start == target.rgb() {
        return Ok(0);
    }

    let matches = |img: &RasterImage, x: usize, y: usize| img.rgb_at(x, y) == start;

    let mut painted = 0;
    let mut stack = vec![(seed_x, seed_y)];

    while let Some((x, mut y)) = stack.pop() {
        // 別のランから既に塗られている
        if !matches(image, x, y) {
            continue;
        }
        while y > 0 && matches(image, x, y - 1) {
            y -= 1;
        }

        let mut reach_left = false;
        let mut reach_right = false;

        while y < height && matches(image, x, y) {
            image.paint(x, y, target);
            painted += 1;

            if x > 0 {
                if matches(image, x - 1, y) {
                    if !reach_left {
                        stack.push((x - 1, y));
                        reach_left = true;
                    }
                } else {
                    reach_left = false;
                }
            }

            if x + 1 < width {
                if matches(image, x + 1, y) {
                    if !reach_right {
                        stack.push((x + 1, y));
                        reach_right = true;
                    }
                } else {
                    reach_right = false;
                }
            }

            y += 1;
        }
    }

    Ok(painted)
}
