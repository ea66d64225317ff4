use {
    safe_dial::{
        dial::{Solution, TEST_INPUT_STR},
        open_utf8_file, Args, Parser,
    },
    std::process::exit,
};

/// Computes and prints one labeled password over one combination document
///
/// Each invocation parses its own instruction sequence and spins its own dial, so the four
/// results are fully independent. A parse failure is fatal: the error is printed to stderr and
/// the process exits nonzero.
fn print_password(label: &str, input: &str, use_click_password_method: bool) {
    match Solution::try_from(input) {
        Ok(solution) => {
            let password: usize = if use_click_password_method {
                solution.zero_click_count()
            } else {
                solution.zero_rest_count()
            };

            println!("{label}: {password}");
        }
        Err(error) => {
            eprintln!("Failed to parse rotation instructions:\n{error:#?}");

            exit(1_i32);
        }
    }
}

fn main() {
    let args: Args = Args::parse();
    let input_file_path: &str = args.input_file_path("input/d1.txt");

    if let Err(error) =
        // SAFETY: This operation is unsafe, we're just hoping nobody else touches the file while
        // this program is executing
        unsafe {
            open_utf8_file(input_file_path, |input: &str| {
                print_password("Part 1 test", TEST_INPUT_STR, false);
                print_password("Part 1", input, false);
                print_password("Part 2 test", TEST_INPUT_STR, true);
                print_password("Part 2", input, true);
            })
        }
    {
        eprintln!(
            "Encountered error {} when opening file \"{}\"",
            error, input_file_path
        );

        exit(1_i32);
    }
}
