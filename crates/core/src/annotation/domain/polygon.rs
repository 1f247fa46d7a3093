use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AnnotateError {
    /// Closing a polygon means appending its first point again; with no
    /// points there is nothing to close. Hit when a face carries none of
    /// the mouth landmark types.
    #[error("cannot close an empty polygon")]
    EmptyPolygon,
}

/// Closes a polygon by appending the first point after the last.
///
/// Points are kept in the order given; no reordering or deduplication.
pub fn close(points: &[(f32, f32)]) -> Result<Vec<(f32, f32)>, AnnotateError> {
    let first = *points.first().ok_or(AnnotateError::EmptyPolygon)?;
    let mut closed = points.to_vec();
    closed.push(first);
    Ok(closed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_appends_first_point() {
        let closed = close(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]).unwrap();
        assert_eq!(closed.len(), 5);
        assert_eq!(closed[4], (0.0, 0.0));
        assert_eq!(&closed[..4], &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    }

    #[test]
    fn test_close_single_point() {
        let closed = close(&[(3.0, 4.0)]).unwrap();
        assert_eq!(closed, vec![(3.0, 4.0), (3.0, 4.0)]);
    }

    #[test]
    fn test_close_empty_is_guarded_error() {
        assert_eq!(close(&[]), Err(AnnotateError::EmptyPolygon));
    }

    #[test]
    fn test_close_preserves_input_order() {
        // Deliberately non-convex order; close() must not canonicalize it.
        let points = [(8.0, 7.0), (2.0, 7.0), (5.0, 8.0), (5.0, 6.0)];
        let closed = close(&points).unwrap();
        assert_eq!(&closed[..4], &points);
    }
}
