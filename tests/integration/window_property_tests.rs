use pagebar::{PagerError, compute_page_window};

fn sweep() -> impl Iterator<Item = (u32, u32, u32)> {
    (1..=12).flat_map(|window| {
        (1..=40).flat_map(move |total| (1..=total).map(move |current| (current, total, window)))
    })
}

#[test]
fn pages_are_contiguous_and_contain_current() {
    for (current, total, window) in sweep() {
        let w = compute_page_window(current, total, window).unwrap();
        let pages = w.pages();
        assert!(!pages.is_empty());
        assert!(
            pages.windows(2).all(|pair| pair[1] == pair[0] + 1),
            "not contiguous: {pages:?} for ({current}, {total}, {window})"
        );
        assert!(pages.contains(&current), "{current} missing from {pages:?}");
        assert!(w.first_page() >= 1);
        assert!(w.last_page() <= total);
    }
}

#[test]
fn window_length_is_capped_by_total() {
    for (current, total, window) in sweep() {
        let w = compute_page_window(current, total, window).unwrap();
        assert_eq!(
            w.pages().len(),
            window.min(total) as usize,
            "length for ({current}, {total}, {window})"
        );
    }
}

#[test]
fn jumps_are_present_only_when_the_window_does_not_reach_the_edge() {
    for (current, total, window) in sweep() {
        let w = compute_page_window(current, total, window).unwrap();
        assert_eq!(
            w.previous_page().is_none(),
            w.first_page() == 1,
            "previous for ({current}, {total}, {window})"
        );
        assert_eq!(
            w.next_page().is_none(),
            w.last_page() == total,
            "next for ({current}, {total}, {window})"
        );
        if let Some(previous) = w.previous_page() {
            assert_eq!(previous, w.first_page() - 1);
        }
        if let Some(next) = w.next_page() {
            assert_eq!(next, w.last_page() + 1);
        }
    }
}

#[test]
fn computation_is_deterministic() {
    for (current, total, window) in sweep() {
        assert_eq!(
            compute_page_window(current, total, window),
            compute_page_window(current, total, window)
        );
    }
}

#[test]
fn concurrent_callers_see_the_same_windows() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                sweep()
                    .map(|(c, t, w)| compute_page_window(c, t, w).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn invalid_input_is_rejected() {
    assert_eq!(compute_page_window(1, 0, 4), Err(PagerError::ZeroTotalPages));
    assert_eq!(compute_page_window(0, 1, 4), Err(PagerError::ZeroCurrentPage));
    assert_eq!(
        compute_page_window(3, 2, 4),
        Err(PagerError::CurrentPageOutOfRange {
            current: 3,
            total: 2
        })
    );
    assert_eq!(compute_page_window(1, 1, 0), Err(PagerError::ZeroWindowSize));
}
