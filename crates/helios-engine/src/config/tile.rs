/// Finds the parallel-tile edge length for a `width` x `height` frame.
///
/// Scans candidates upward from `preferred` to `max(width, height)` inclusive
/// and returns the first one that divides both dimensions, so the renderer can
/// partition the frame into whole, non-overlapping tiles with no remainder
/// strip. The smallest valid divisor wins: more, smaller tiles distribute
/// parallel work more evenly than fewer large ones.
///
/// If no candidate in range divides both dimensions (in particular when
/// `preferred > max(width, height)`, which empties the scan range), `preferred`
/// is returned unchanged. On that path the result may not divide the frame;
/// [`RenderConfig`](super::RenderConfig) logs it at construction and the tiled
/// renderer must then handle a partial edge tile.
///
/// O(max(width, height)) worst case; runs once per process at startup.
pub fn divisor_tile_size(width: u32, height: u32, preferred: u32) -> u32 {
    debug_assert!(width > 0 && height > 0 && preferred > 0);

    for i in preferred..=width.max(height) {
        if width % i == 0 && height % i == 0 {
            return i;
        }
    }

    preferred
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── exact divisors ────────────────────────────────────────────────────

    #[test]
    fn preferred_already_divides_both() {
        // 1920 = 15 * 128, 1200 = 15 * 80.
        assert_eq!(divisor_tile_size(1920, 1200, 15), 15);
    }

    #[test]
    fn scans_upward_to_next_common_divisor() {
        // 3 divides neither; 4 divides both.
        assert_eq!(divisor_tile_size(100, 80, 3), 4);
        assert_eq!(divisor_tile_size(8, 8, 3), 4);
    }

    #[test]
    fn square_frame_accepts_its_own_edge() {
        assert_eq!(divisor_tile_size(64, 64, 64), 64);
    }

    #[test]
    fn returned_divisor_is_minimal() {
        let t = divisor_tile_size(1920, 1200, 7);
        assert!(t >= 7);
        assert_eq!(1920 % t, 0);
        assert_eq!(1200 % t, 0);
        for smaller in 7..t {
            assert!(1920 % smaller != 0 || 1200 % smaller != 0);
        }
    }

    // ── fallback ──────────────────────────────────────────────────────────

    #[test]
    fn coprime_dimensions_fall_back_to_preferred() {
        // 1921 = 17 * 113 shares no divisor >= 2 with 1200.
        assert_eq!(divisor_tile_size(1921, 1200, 15), 15);
        assert_eq!(divisor_tile_size(7, 13, 2), 2);
    }

    #[test]
    fn preferred_above_both_dimensions_falls_back() {
        // Empty scan range: no candidate is even tried.
        assert_eq!(divisor_tile_size(640, 480, 1000), 1000);
    }

    #[test]
    fn fallback_fires_only_without_a_common_divisor_in_range() {
        // Exhaustive over a small grid: the result either divides both
        // dimensions, or equals `preferred` with no common divisor in
        // [preferred, max(w, h)].
        for w in 1u32..=24 {
            for h in 1u32..=24 {
                for p in 1u32..=10 {
                    let t = divisor_tile_size(w, h, p);
                    if w % t == 0 && h % t == 0 && t >= p {
                        continue;
                    }
                    assert_eq!(t, p);
                    assert!((p..=w.max(h)).all(|i| w % i != 0 || h % i != 0));
                }
            }
        }
    }

    #[test]
    fn deterministic_across_calls() {
        assert_eq!(
            divisor_tile_size(1921, 1200, 15),
            divisor_tile_size(1921, 1200, 15)
        );
    }

    #[test]
    fn degenerate_one_by_one_frame() {
        assert_eq!(divisor_tile_size(1, 1, 1), 1);
    }
}
