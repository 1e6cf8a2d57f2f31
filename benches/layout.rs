use criterion::{black_box, criterion_group, criterion_main, Criterion};
use words_tui::core::BoardSnapshot;
use words_tui::term::{layout_board, BoardView, FrameBuffer, LayoutOptions, Viewport};
use words_tui::types::Cell;

fn bench_layout(c: &mut Criterion) {
    let board = BoardSnapshot::standard();
    let options = LayoutOptions::default();

    c.bench_function("layout_15x15", |b| {
        b.iter(|| layout_board(black_box(&board), &options))
    });
}

fn bench_compose(c: &mut Criterion) {
    let board = BoardSnapshot::standard().with_cell(7, 7, Cell::Letter('W'));
    let tree = layout_board(&board, &LayoutOptions::default()).unwrap();
    let view = BoardView::default();
    let mut fb = FrameBuffer::new(120, 60);

    c.bench_function("compose_15x15", |b| {
        b.iter(|| view.render_into(black_box(&tree), Viewport::new(120, 60), &mut fb))
    });
}

criterion_group!(benches, bench_layout, bench_compose);
criterion_main!(benches);
