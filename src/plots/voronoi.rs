//! Voronoi cells by successive half-plane clipping.
//!
//! Each cell starts as the bounding square and is cut by the perpendicular
//! bisector between its site and every other site. Quadratic in the number of
//! sites, which is fine for the few hundred cells a map holds.

use bevy::prelude::*;

use crate::math;

/// Clipped Voronoi cell of every site, in site order.
///
/// Cells are counter-clockwise in XY. A cell is empty when nothing of the site's
/// region remains inside the square `[-half_extent, half_extent]²` (possible for
/// sites outside the square or coincident sites).
pub fn voronoi_cells(sites: &[Vec2], half_extent: f32) -> Vec<Vec<Vec2>> {
    let bounds = [
        Vec2::new(-half_extent, -half_extent),
        Vec2::new(half_extent, -half_extent),
        Vec2::new(half_extent, half_extent),
        Vec2::new(-half_extent, half_extent),
    ];

    sites
        .iter()
        .enumerate()
        .map(|(i, &site)| {
            let mut cell = bounds.to_vec();
            for (j, &other) in sites.iter().enumerate() {
                if i == j || cell.is_empty() {
                    continue;
                }
                let normal = other - site;
                if normal == Vec2::ZERO {
                    // Coincident sites: the lower index keeps the region
                    if j < i {
                        cell.clear();
                    }
                    continue;
                }
                cell = math::clip_to_half_plane(&cell, (site + other) / 2.0, normal);
            }
            cell
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(cell: &[Vec2]) -> f32 {
        math::polygon_signed_area(cell)
    }

    #[test]
    fn single_site_owns_whole_square() {
        let cells = voronoi_cells(&[Vec2::new(3.0, -2.0)], 5.0);
        assert_eq!(cells.len(), 1);
        assert!((area(&cells[0]) - 100.0).abs() < 1e-3);
    }

    #[test]
    fn two_sites_split_square_along_bisector() {
        let cells = voronoi_cells(&[Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0)], 5.0);
        assert!((area(&cells[0]) - 50.0).abs() < 1e-3);
        assert!((area(&cells[1]) - 50.0).abs() < 1e-3);
        assert!(cells[0].iter().all(|p| p.x <= 1e-4));
        assert!(cells[1].iter().all(|p| p.x >= -1e-4));
    }

    #[test]
    fn cell_areas_sum_to_square_area() {
        let sites = [
            Vec2::new(-3.0, -3.0),
            Vec2::new(2.5, -1.0),
            Vec2::new(0.0, 4.0),
            Vec2::new(-4.0, 2.0),
            Vec2::new(3.5, 3.5),
            Vec2::new(0.2, 0.1),
        ];
        let cells = voronoi_cells(&sites, 5.0);
        let total: f32 = cells.iter().map(|c| area(c)).sum();
        assert!((total - 100.0).abs() < 1e-2, "total area {total}");
    }

    #[test]
    fn every_cell_point_is_closest_to_its_own_site() {
        let sites = [
            Vec2::new(-2.0, 1.0),
            Vec2::new(1.5, 2.5),
            Vec2::new(0.5, -3.0),
            Vec2::new(3.0, 0.0),
        ];
        let cells = voronoi_cells(&sites, 5.0);
        for (i, cell) in cells.iter().enumerate() {
            for p in cell {
                let own = p.distance(sites[i]);
                for other in &sites {
                    assert!(own <= p.distance(*other) + 1e-3);
                }
            }
        }
    }

    #[test]
    fn site_far_outside_bounds_gets_empty_cell() {
        let cells = voronoi_cells(&[Vec2::ZERO, Vec2::new(100.0, 100.0)], 10.0);
        assert!((area(&cells[0]) - 400.0).abs() < 1e-2);
        assert!(cells[1].is_empty());
    }

    #[test]
    fn coincident_sites_leave_one_empty_cell() {
        let cells = voronoi_cells(&[Vec2::ONE, Vec2::ONE], 5.0);
        assert_eq!(cells[0].len(), 4);
        assert!(cells[1].is_empty());
    }

    #[test]
    fn no_sites_no_cells() {
        assert!(voronoi_cells(&[], 5.0).is_empty());
    }
}
