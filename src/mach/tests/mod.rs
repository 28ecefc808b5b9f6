use crate::lang::Line;
use crate::mach::{Event, Runtime};

mod dispatch_test;

fn run(runtime: &mut Runtime) -> String {
    run_cycles(runtime, 5000)
}

fn run_cycles(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) | Event::List(ps) => {
                s.push_str(&format!("{}\n", ps));
            }
        }
        prev_running = event == Event::Running;
    }
    s
}

fn load(runtime: &mut Runtime, lines: &[(i32, &str)]) {
    for (number, text) in lines {
        runtime.add_line(Line::new(*number, *text)).unwrap();
    }
}
