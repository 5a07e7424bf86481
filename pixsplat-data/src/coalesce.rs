//! Greedy merging of adjacent same-color splats.

use crate::splat::SplatGrid;
use tracing::debug;

/// Merge axis-adjacent splats with bit-identical color in a single forward
/// raster pass, returning the number of splats left alive.
///
/// For each live splat, the right neighbor and then the bottom neighbor are
/// checked for exact color equality. A match averages the position along
/// the merge axis, doubles the scale along it, and kills the neighbor. A
/// splat may absorb both neighbors in one visit; a dead splat is never
/// visited as a merge source again. The result is order-dependent and not
/// globally optimal, which matches the legacy exporter and is relied on by
/// downstream comparisons - do not replace this with connected-component
/// clustering.
///
/// Only meaningful for depth-less grids; with a depth map every pixel
/// carries its own geometry and the caller must skip this pass.
pub fn coalesce(grid: &mut SplatGrid) -> usize {
    let width = grid.width() as usize;
    let height = grid.height() as usize;
    let splats = grid.splats_mut();

    for y in 0..height {
        for x in 0..width {
            let i = y * width + x;
            if !splats[i].alive {
                continue;
            }

            // Right neighbor. The neighbor's own liveness is not checked:
            // a splat already killed by a bottom-merge from the row above
            // can be absorbed again, as the legacy exporter did.
            if x + 1 < width && splats[i].sh_dc == splats[i + 1].sh_dc {
                let right_x = splats[i + 1].position.x;
                splats[i].position.x = (splats[i].position.x + right_x) / 2.0;
                splats[i].scale.x *= 2.0;
                splats[i + 1].alive = false;
            }

            // Bottom neighbor.
            if y + 1 < height && splats[i].sh_dc == splats[i + width].sh_dc {
                let bottom_y = splats[i + width].position.y;
                splats[i].position.y = (splats[i].position.y + bottom_y) / 2.0;
                splats[i].scale.y *= 2.0;
                splats[i + width].alive = false;
            }
        }
    }

    let live = grid.live_count();
    debug!("coalesced {} splats down to {}", grid.len(), live);
    live
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_splats;
    use image::{Rgb, RgbImage};

    fn grid_from_pixels(width: u32, height: u32, pixels: &[[u8; 3]]) -> SplatGrid {
        let image = RgbImage::from_fn(width, height, |x, y| {
            Rgb(pixels[(y * width + x) as usize])
        });
        build_splats(&image, None)
    }

    #[test]
    fn test_distinct_colors_do_not_merge() {
        let mut grid = grid_from_pixels(2, 1, &[[255, 0, 0], [0, 255, 0]]);
        let live = coalesce(&mut grid);

        assert_eq!(live, 2);
        assert_eq!(grid.splats()[0].position.x, 0.0);
        assert_eq!(grid.splats()[0].scale.x, 0.1);
    }

    #[test]
    fn test_right_merge_averages_and_doubles() {
        let mut grid = grid_from_pixels(2, 1, &[[42, 42, 42], [42, 42, 42]]);
        let live = coalesce(&mut grid);

        assert_eq!(live, 1);
        let s = &grid.splats()[0];
        assert_eq!(s.position.x, 0.5);
        assert_eq!(s.scale.x, 0.2);
        assert!(!grid.splats()[1].alive);
    }

    #[test]
    fn test_bottom_merge_averages_and_doubles() {
        let mut grid = grid_from_pixels(1, 2, &[[7, 7, 7], [7, 7, 7]]);
        let live = coalesce(&mut grid);

        assert_eq!(live, 1);
        let s = &grid.splats()[0];
        assert_eq!(s.position.y, 0.5);
        assert_eq!(s.scale.y, 0.2);
    }

    #[test]
    fn test_uniform_square_leaves_two_splats() {
        // Greedy raster order: (0,0) absorbs both neighbors, (1,1) is
        // never absorbed. A connected-component merge would leave one.
        let mut grid = grid_from_pixels(2, 2, &[[9, 9, 9]; 4]);
        let live = coalesce(&mut grid);

        assert_eq!(live, 2);
        assert!(grid.splats()[0].alive);
        assert!(!grid.splats()[1].alive);
        assert!(!grid.splats()[2].alive);
        assert!(grid.splats()[3].alive);
        assert_eq!(grid.splats()[0].scale.x, 0.2);
        assert_eq!(grid.splats()[0].scale.y, 0.2);
    }

    #[test]
    fn test_uniform_row_is_pairwise_greedy() {
        let mut grid = grid_from_pixels(3, 1, &[[1, 2, 3]; 3]);
        let live = coalesce(&mut grid);

        // (0,0) absorbs (1,0); (1,0) is dead when its turn comes, so it
        // never absorbs (2,0), which survives untouched.
        assert_eq!(live, 2);
        assert!(grid.splats()[2].alive);
        assert_eq!(grid.splats()[2].scale.x, 0.1);
    }

    #[test]
    fn test_dead_neighbor_can_be_absorbed_again() {
        // Layout: A B
        //         B B
        // (0,1) merges right into (1,1) even though (1,1) was already
        // killed by the bottom-merge from (1,0).
        let mut grid = grid_from_pixels(
            2,
            2,
            &[[200, 0, 0], [0, 0, 200], [0, 0, 200], [0, 0, 200]],
        );
        let live = coalesce(&mut grid);

        assert_eq!(live, 3);
        let bottom_left = &grid.splats()[grid.index(0, 1)];
        assert_eq!(bottom_left.position.x, 0.5);
        assert_eq!(bottom_left.scale.x, 0.2);
        assert!(!grid.splats()[grid.index(1, 1)].alive);
    }

    #[test]
    fn test_count_never_increases() {
        let mut grid = grid_from_pixels(
            3,
            2,
            &[
                [1, 1, 1],
                [1, 1, 1],
                [2, 2, 2],
                [2, 2, 2],
                [1, 1, 1],
                [3, 3, 3],
            ],
        );
        let total = grid.len();
        let live = coalesce(&mut grid);

        assert!(live <= total);
        assert_eq!(live, grid.live_count());
    }

    #[test]
    fn test_single_pixel_untouched() {
        let mut grid = grid_from_pixels(1, 1, &[[5, 5, 5]]);
        let live = coalesce(&mut grid);

        assert_eq!(live, 1);
        assert_eq!(grid.splats()[0].scale.x, 0.1);
        assert_eq!(grid.splats()[0].position.x, 0.0);
    }
}
