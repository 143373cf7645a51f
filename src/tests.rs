#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::config::enhance::{ALL_DARK_INDEX, ALL_LIT_INDEX, TABLE_LEN};
    use crate::enhance::{EnhancementTable, Grid, GridError, Puzzle};

    const SAMPLE: &str = include_str!("../input/sample.txt");

    fn sample() -> Puzzle {
        SAMPLE.parse().expect("sample puzzle should parse")
    }

    fn random_table(rng: &mut StdRng, dark: bool, lit: bool) -> EnhancementTable {
        let mut pixels: Vec<bool> = (0..TABLE_LEN).map(|_| rng.random_bool(0.5)).collect();
        pixels[ALL_DARK_INDEX] = dark;
        pixels[ALL_LIT_INDEX] = lit;
        EnhancementTable::from_pixels(&pixels).unwrap()
    }

    fn random_grid(rng: &mut StdRng, rows: usize, cols: usize) -> Grid {
        let rows: Vec<String> = (0..rows)
            .map(|_| (0..cols).map(|_| if rng.random_bool(0.3) { '#' } else { '.' }).collect())
            .collect();
        Grid::from_rows(rows)
    }

    #[test]
    fn test_sample_two_steps() {
        let grid = sample().run(2);
        assert!(!grid.background_lit());
        assert_eq!(grid.count_lit(), Ok(35));
    }

    #[test]
    fn test_sample_fifty_steps() {
        let grid = sample().run(50);
        assert!(!grid.background_lit());
        assert_eq!(grid.count_lit(), Ok(3351));
    }

    #[test]
    fn test_sample_first_step() {
        let grid = sample().run(1);
        assert_eq!(grid.tracked_len(), 49);
        assert_eq!(grid.count_lit(), Ok(24));
    }

    #[test]
    fn test_sample_display() {
        let puzzle = sample();
        assert_eq!(puzzle.to_string(), format!("{}\nbackground: .", SAMPLE.trim_end()));
    }

    #[test]
    fn test_bounds_grow_by_one_each_step() {
        let mut rng = StdRng::seed_from_u64(20);
        let table = random_table(&mut rng, false, false);
        let mut grid = random_grid(&mut rng, 6, 9);

        for _ in 0..10 {
            let before = grid.bounds().unwrap();
            grid = grid.step(&table);
            let after = grid.bounds().unwrap();

            assert_eq!(after, before.expanded(1));
            assert_eq!(grid.tracked_len() as u64, after.height() * after.width());
        }
    }

    #[test]
    fn test_dark_background_stays_dark() {
        let mut rng = StdRng::seed_from_u64(1);
        let puzzle = Puzzle::new(random_table(&mut rng, false, true), random_grid(&mut rng, 5, 5));

        assert!(puzzle.generations().take(30).all(|grid| !grid.background_lit()));
    }

    #[test]
    fn test_background_alternates() {
        let mut rng = StdRng::seed_from_u64(2);
        let puzzle = Puzzle::new(random_table(&mut rng, true, false), random_grid(&mut rng, 5, 5));

        for (steps, grid) in puzzle.generations().take(21).enumerate() {
            assert_eq!(grid.background_lit(), steps % 2 == 1);
        }
        assert_eq!(puzzle.run(3).count_lit(), Err(GridError::InfiniteLit));
        assert!(puzzle.run(4).count_lit().is_ok());
    }

    #[test]
    fn test_background_converges_lit() {
        let mut rng = StdRng::seed_from_u64(3);
        let puzzle = Puzzle::new(random_table(&mut rng, true, true), random_grid(&mut rng, 4, 4));

        let grids: Vec<Grid> = puzzle.generations().take(10).collect();
        assert!(!grids[0].background_lit());
        assert!(grids[1..].iter().all(|grid| grid.background_lit()));
    }

    #[test]
    fn test_step_is_pure() {
        let mut rng = StdRng::seed_from_u64(4);
        let table = random_table(&mut rng, true, false);
        let grid = random_grid(&mut rng, 8, 8);
        let snapshot = grid.clone();

        let first = grid.step(&table);
        let second = grid.step(&table);

        assert_eq!(first, second);
        assert_eq!(grid, snapshot);
    }
}
