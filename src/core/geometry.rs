// Joint angle geometry over normalized image-plane keypoints

use crate::models::landmark::{BodyLandmark, Keypoint, LandmarkSnapshot};

/// Interior angle at vertex `b` in degrees, in [0, 180]
///
/// Computed from the two atan2 bearings b->c and b->a; results past 180
/// are folded back so the smaller of the two angle measures is always
/// returned, whichever order `a` and `c` are supplied in. Collinear or
/// coincident input yields 0 or 180 rather than an error.
pub fn joint_angle(a: Keypoint, b: Keypoint, c: Keypoint) -> f32 {
    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let angle = radians.to_degrees().abs();

    if angle > 180.0 {
        360.0 - angle
    } else {
        angle
    }
}

/// Horizontal distance between the shoulders in normalized units
///
/// A small span means the subject is side-on to the camera, a large one
/// that they are facing it; the counters gate on this to reject frames
/// shot from the wrong orientation. `None` when either shoulder is
/// missing or below the visibility floor.
pub fn shoulder_span(snapshot: &LandmarkSnapshot, min_visibility: f32) -> Option<f32> {
    let left = snapshot.visible_keypoint(BodyLandmark::LeftShoulder, min_visibility)?;
    let right = snapshot.visible_keypoint(BodyLandmark::RightShoulder, min_visibility)?;

    Some((left.x - right.x).abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::landmark::LANDMARK_COUNT;

    fn kp(x: f32, y: f32) -> Keypoint {
        Keypoint::new(x, y, 1.0)
    }

    #[test]
    fn test_collinear_points_are_straight() {
        // B between A and C on a line
        let angle = joint_angle(kp(0.0, 0.0), kp(0.5, 0.0), kp(1.0, 0.0));
        assert!((angle - 180.0).abs() < 1e-3);

        // Same along a diagonal
        let angle = joint_angle(kp(0.1, 0.1), kp(0.2, 0.2), kp(0.3, 0.3));
        assert!((angle - 180.0).abs() < 1e-3);
    }

    #[test]
    fn test_right_angle() {
        let angle = joint_angle(kp(1.0, 0.0), kp(0.0, 0.0), kp(0.0, 1.0));
        assert!((angle - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_symmetry_in_endpoint_order() {
        let a = kp(0.12, 0.74);
        let b = kp(0.43, 0.21);
        let c = kp(0.88, 0.66);

        assert!((joint_angle(a, b, c) - joint_angle(c, b, a)).abs() < 1e-3);
    }

    #[test]
    fn test_reflex_angles_are_folded_back() {
        // Bearings of 170 and -170 degrees differ by 340; the folded
        // interior angle is 20
        let angle = joint_angle(kp(-1.0, 0.17633), kp(0.0, 0.0), kp(-1.0, -0.17633));
        assert!((angle - 20.0).abs() < 0.1);
    }

    #[test]
    fn test_range_invariant() {
        let points = [
            kp(0.0, 0.0),
            kp(1.0, 0.0),
            kp(0.0, 1.0),
            kp(0.3, 0.7),
            kp(0.9, 0.1),
            kp(0.5, 0.5),
        ];

        for &a in &points {
            for &b in &points {
                for &c in &points {
                    let angle = joint_angle(a, b, c);
                    assert!((0.0..=180.0).contains(&angle), "angle {} out of range", angle);
                }
            }
        }
    }

    #[test]
    fn test_degenerate_input_does_not_fault() {
        // All three coincident
        let angle = joint_angle(kp(0.5, 0.5), kp(0.5, 0.5), kp(0.5, 0.5));
        assert!((0.0..=180.0).contains(&angle));

        // A and C on the same ray from B
        let angle = joint_angle(kp(0.2, 0.0), kp(0.0, 0.0), kp(0.9, 0.0));
        assert!(angle.abs() < 1e-3);
    }

    #[test]
    fn test_shoulder_span() {
        let mut keypoints = vec![Keypoint::new(0.0, 0.0, 1.0); LANDMARK_COUNT];
        keypoints[BodyLandmark::LeftShoulder.index()] = Keypoint::new(0.62, 0.4, 1.0);
        keypoints[BodyLandmark::RightShoulder.index()] = Keypoint::new(0.40, 0.4, 1.0);
        let snapshot = LandmarkSnapshot::new(0, keypoints);

        let span = shoulder_span(&snapshot, 0.0).unwrap();
        assert!((span - 0.22).abs() < 1e-6);
    }

    #[test]
    fn test_shoulder_span_missing_landmark() {
        let snapshot = LandmarkSnapshot::new(0, Vec::new());
        assert!(shoulder_span(&snapshot, 0.0).is_none());
    }
}
