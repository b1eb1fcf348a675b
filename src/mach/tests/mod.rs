use crate::mach::{Event, Halt, Listing, Runtime};

mod loop_test;

fn runtime(source: &str) -> Runtime {
    Runtime::new(Listing::load_str(source).unwrap())
}

fn run(runtime: &mut Runtime) -> String {
    run_cycles(runtime, 5000)
}

fn run_cycles(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    loop {
        match runtime.execute(cycles) {
            Event::Running => {}
            Event::Trace(line_number, ts) => {
                s.push_str(&format!("{}> {}\n", line_number, ts));
            }
            Event::Print(ps) => {
                s.push_str(&ps);
            }
            Event::Halted(Halt::Error(error)) => {
                s.push_str(&format!("{}\n", error));
                break;
            }
            Event::Halted(Halt::Limit) => {
                s.push_str("LIMIT\n");
                break;
            }
            Event::Halted(Halt::Normal) => break,
        }
    }
    s
}
