use super::*;

#[test]
fn nested_depth_count() {
    fn depth(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
    }

    // Far deeper than an 8MB main stack allows without growth.
    assert_eq!(depth(200_000), 200_000);
}

#[test]
fn passes_results_through() {
    let result: Result<u8, &str> = ensure_sufficient_stack(|| Err("underflow"));
    assert_eq!(result, Err("underflow"));
}

#[test]
fn large_frames_between_guards() {
    // 16KB of locals per level, well inside the red zone.
    fn depth(n: u32) -> u32 {
        ensure_sufficient_stack(|| {
            let frame = std::hint::black_box([n as u8; 16 * 1024]);
            if n == 0 {
                u32::from(frame[0])
            } else {
                depth(n - 1) + 1
            }
        })
    }

    assert_eq!(depth(5_000), 5_000);
}
