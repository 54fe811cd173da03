//! trivm CLI: Command-line interface for loading and executing programs.

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use trivm_executor::{ExecutorError, Machine, DEFAULT_MAX_STEPS};

/// trivm: deterministic ternary virtual machine
#[derive(Parser)]
#[command(name = "trivm")]
#[command(version = "0.1.0")]
#[command(about = "Execute self-decrypting ternary VM programs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a program
    Run {
        /// Path to the program text
        #[arg(value_name = "PATH")]
        program: PathBuf,

        /// Maximum execution steps
        #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
        max_steps: u64,

        /// Write a JSON execution trace to this path
        #[arg(long, value_name = "PATH")]
        trace_out: Option<PathBuf>,
    },

    /// Validate and load a program without executing it
    Check {
        /// Path to the program text
        #[arg(value_name = "PATH")]
        program: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            program,
            max_steps,
            trace_out,
        } => run_command(&program, max_steps, trace_out.as_deref()),
        Commands::Check { program } => check_command(&program),
    }
}

fn read_program(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading program: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_command(path: &Path, max_steps: u64, trace_out: Option<&Path>) {
    println!("=== trivm run ===\n");
    println!("Program:   {}", path.display());
    println!("Max steps: {}", max_steps);

    let text = read_program(path);

    let mut machine = Machine::new();
    if trace_out.is_some() {
        machine.enable_tracing();
    }
    if let Err(e) = machine.load(&text) {
        eprintln!("Error loading program: {}", e);
        std::process::exit(1);
    }

    println!("\nRunning...");
    let start = Instant::now();
    let result = machine.run(max_steps);
    let elapsed = start.elapsed();

    match result {
        Ok(output) => {
            println!("  Halted in {:?}", elapsed);
            println!("\nOutput:  {:?}", output);
            println!("Cycles:  {}", machine.cycle);
        }
        Err(e @ ExecutorError::CycleLimitExceeded { .. }) => {
            eprintln!("  {}", e);
            eprintln!("\nPartial output: {:?}", machine.output());
            eprintln!("Cycles:         {}", machine.cycle);
            write_trace(&mut machine, trace_out);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("  Execution error at cycle {}: {}", machine.cycle, e);
            eprintln!("\nPartial output: {:?}", machine.output());
            write_trace(&mut machine, trace_out);
            std::process::exit(1);
        }
    }

    write_trace(&mut machine, trace_out);
}

fn write_trace(machine: &mut Machine, trace_out: Option<&Path>) {
    let Some(path) = trace_out else {
        return;
    };
    let Some(trace) = machine.take_trace() else {
        return;
    };
    let json = match serde_json::to_string_pretty(&trace) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error serializing trace: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = fs::write(path, json) {
        eprintln!("Error writing trace: {}", e);
        std::process::exit(1);
    }
    println!("Trace:   {} rows -> {}", trace.len(), path.display());
}

fn check_command(path: &Path) {
    println!("=== trivm check ===\n");
    println!("Program: {}", path.display());

    let text = read_program(path);

    let mut memory = trivm_executor::Memory::new();
    match trivm_executor::load_program(&mut memory, &text) {
        Ok(len) => {
            println!("\nProgram is valid: {} cells", len);
        }
        Err(e) => {
            eprintln!("\nInvalid program: {}", e);
            std::process::exit(1);
        }
    }
}
