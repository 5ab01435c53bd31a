use grid_astar::{search, Cell, GridView, LogReporter};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let grid = vec![vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 1]];
    println!("{}", GridView::new(&grid).unwrap());
    let start = Cell::new(0, 0);
    let end = Cell::new(2, 2);
    let path = search(&grid, start, end, &mut LogReporter).unwrap();
    println!("Path:");
    for p in path {
        println!("{}", p);
    }
}
