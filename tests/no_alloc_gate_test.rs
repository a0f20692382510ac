use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use klotski_tui::core::{Puzzle, PuzzleSnapshot};
use klotski_tui::term::{FrameBuffer, PuzzleView, Viewport};
use klotski_tui::types::{Direction, Pos, PuzzleAction};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn puzzle_and_render_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut puzzle = Puzzle::new();
    let view = PuzzleView::default();
    let vp = Viewport::new(80, 24);
    let mut snap = PuzzleSnapshot::default();
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    // Warm-up.
    puzzle.snapshot_into(&mut snap);
    view.render_into(&snap, vp, &mut fb);

    let allocs = with_alloc_counting(|| {
        for round in 0..50 {
            for dir in Direction::ALL {
                let _ = puzzle.apply_action(PuzzleAction::Move(dir));
            }
            let _ = puzzle.apply_action(PuzzleAction::SelectNext);
            let _ = puzzle.apply_action(PuzzleAction::Select(round % 12));
            let _ = puzzle.apply_action(PuzzleAction::SelectAt(Pos::new(
                (round % 5) as i8,
                (round % 6) as i8,
            )));
            if round % 10 == 9 {
                let _ = puzzle.apply_action(PuzzleAction::Reset);
            }

            puzzle.snapshot_into(&mut snap);
            view.render_into(&snap, vp, &mut fb);
        }
    });

    assert_eq!(allocs, 0);
}
