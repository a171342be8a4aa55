//! Uniform reference points on the unit simplex (Das & Dennis, 1998).

/// Generates reference points uniformly on the hyperplane intersecting
/// each objective axis at 1.
///
/// `per_objective` controls the lattice density: the result has
/// `C(per_objective + objectives - 1, objectives - 1)` points whose
/// coordinates are multiples of `1 / per_objective` summing to 1.
/// An optional `scaling` factor shrinks the layer towards the hyperplane
/// centroid, which is how multiple layers are combined for many-objective
/// selection (Deb & Jain, 2014).
///
/// # Example
///
/// ```
/// use pareto_kit::selection::uniform_reference_points;
///
/// let points = uniform_reference_points(2, 4, None);
/// assert_eq!(points.len(), 5);
/// assert_eq!(points[0], vec![0.0, 1.0]);
/// assert_eq!(points[4], vec![1.0, 0.0]);
/// ```
pub fn uniform_reference_points(
    objectives: usize,
    per_objective: usize,
    scaling: Option<f64>,
) -> Vec<Vec<f64>> {
    if objectives == 0 {
        return Vec::new();
    }

    let mut points = Vec::new();
    let mut current = vec![0.0; objectives];
    lattice(&mut points, &mut current, objectives, per_objective, per_objective, 0);

    if let Some(s) = scaling {
        let shift = (1.0 - s) / objectives as f64;
        for point in &mut points {
            for v in point.iter_mut() {
                *v = *v * s + shift;
            }
        }
    }

    points
}

fn lattice(
    points: &mut Vec<Vec<f64>>,
    current: &mut Vec<f64>,
    objectives: usize,
    left: usize,
    total: usize,
    depth: usize,
) {
    if depth == objectives - 1 {
        current[depth] = left as f64 / total as f64;
        points.push(current.clone());
    } else {
        for i in 0..=left {
            current[depth] = i as f64 / total as f64;
            lattice(points, current, objectives, left - i, total, depth + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_objectives() {
        let points = uniform_reference_points(2, 4, None);
        assert_eq!(points.len(), 5);
        for point in &points {
            let sum: f64 = point.iter().sum();
            assert!((sum - 1.0).abs() < 1e-12);
        }
        assert_eq!(points[2], vec![0.5, 0.5]);
    }

    #[test]
    fn test_three_objectives_count() {
        // C(4 + 2, 2) = 15 lattice points.
        let points = uniform_reference_points(3, 4, None);
        assert_eq!(points.len(), 15);
        for point in &points {
            let sum: f64 = point.iter().sum();
            assert!((sum - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_scaling_pulls_towards_centroid() {
        let points = uniform_reference_points(2, 2, Some(0.5));
        // (0, 1) scaled by 0.5 and shifted by 0.25 per coordinate.
        assert_eq!(points[0], vec![0.25, 0.75]);
        // Scaled points still sum to 1.
        for point in &points {
            let sum: f64 = point.iter().sum();
            assert!((sum - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_objectives() {
        assert!(uniform_reference_points(0, 4, None).is_empty());
    }
}
