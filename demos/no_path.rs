use grid_astar::{Cell, Pathfinder, SearchConfig, SearchOutcome, Severity};

// The end cell is walled off:
//  ____
// |S # |
// |  #E|
//  ____
// The reporter prints the warning the search sends when the open set runs out.

fn main() {
    let grid = vec![vec![1, 1, 0, 1], vec![1, 1, 0, 1]];
    let pathfinder = Pathfinder::new(SearchConfig::default().with_component_precheck(true));
    let mut display_message = |message: &str, severity: Severity| {
        println!("[{}] {}", severity, message);
    };
    match pathfinder.find_path(&grid, Cell::new(0, 0), Cell::new(1, 3), &mut display_message) {
        Ok(SearchOutcome::Found(path)) => println!("Path: {:?}", path),
        Ok(outcome) => println!("Search ended with {:?}", outcome),
        Err(e) => println!("Rejected: {}", e),
    }
}
