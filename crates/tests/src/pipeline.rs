//! Pipeline integration tests.
//!
//! Tests the full flow: assemble -> load -> execute -> inspect.

use trivm_executor::{ExecutorError, Machine};

/// Load `program`, run it under `max_steps`, and return the machine
/// alongside the run result.
pub fn execute(program: &str, max_steps: u64) -> (Machine, Result<String, ExecutorError>) {
    let mut machine = Machine::new();
    machine.enable_tracing();
    machine
        .load(program)
        .expect("test programs are valid text");
    let result = machine.run(max_steps);
    (machine, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::programs;
    use trivm_executor::Opcode;

    #[test]
    fn test_halt_program() {
        let (machine, result) = execute(&programs::halt_program(), 10);
        assert_eq!(result.unwrap(), "");
        assert_eq!(machine.cycle, 0);
        assert!(machine.is_halted());
    }

    #[test]
    fn test_output_then_halt() {
        let (machine, result) = execute(&programs::output_then_halt(), 10);
        assert_eq!(result.unwrap(), "\u{0}");
        assert_eq!(machine.cycle, 1);
    }

    #[test]
    fn test_rotate_output_halt() {
        let (machine, result) = execute(&programs::rotate_output_halt(), 10);
        assert_eq!(result.unwrap(), "i");
        assert_eq!(machine.cycle, 2);
    }

    #[test]
    fn test_crazy_output_halt() {
        let (machine, result) = execute(&programs::crazy_output_halt(), 10);
        assert_eq!(result.unwrap(), "T");
        assert_eq!(machine.a.value(), 29_524);
        assert_eq!(machine.cycle, 2);
    }

    #[test]
    fn test_endless_jump_loop_exhausts_fuel_at_zero_cycles() {
        let (machine, result) = execute(&programs::endless_jump_loop(), 500);
        assert!(matches!(
            result,
            Err(ExecutorError::CycleLimitExceeded { executed: 0, limit: 500 })
        ));
        assert_eq!(machine.cycle, 0);
        assert_eq!(machine.output(), "");
    }

    #[test]
    fn test_trace_covers_every_step() {
        let (mut machine, result) = execute(&programs::rotate_output_halt(), 10);
        result.unwrap();
        let trace = machine.take_trace().unwrap();
        assert_eq!(trace.len(), 3);
        assert_eq!(
            trace.rows.iter().map(|r| r.opcode).collect::<Vec<_>>(),
            vec![Opcode::Rotate, Opcode::Output, Opcode::Halt],
        );
        assert!(trace.halted);
        assert_eq!(trace.total_cycles, machine.cycle);
    }

    #[test]
    fn test_runs_are_deterministic() {
        let first = execute(&programs::crazy_output_halt(), 10);
        let second = execute(&programs::crazy_output_halt(), 10);
        assert_eq!(first.1.unwrap(), second.1.unwrap());
        assert_eq!(first.0.cycle, second.0.cycle);
        assert_eq!(first.0.a, second.0.a);
    }

    #[test]
    fn test_loaded_memory_obeys_the_crazy_recurrence() {
        // The fill generator and the crazy instruction are the same
        // function, so the loaded image must satisfy the recurrence
        // cell[i] = crazy(cell[i-1], cell[i-2]) beyond the program text.
        let program = programs::rotate_output_halt();
        let mut machine = Machine::new();
        machine.load(&program).unwrap();
        for i in program.len() as i64..trivm_executor::MEMORY_SIZE as i64 {
            assert_eq!(
                machine.memory.read_wrapped(i),
                trivm_primitives::crazy(
                    machine.memory.read_wrapped(i - 1),
                    machine.memory.read_wrapped(i - 2),
                ),
            );
        }
    }

    #[test]
    fn test_trace_serializes_to_json() {
        let (mut machine, result) = execute(&programs::output_then_halt(), 10);
        result.unwrap();
        let trace = machine.take_trace().unwrap();
        let json = serde_json::to_string(&trace).unwrap();
        let back: trivm_executor::ExecutionTrace = serde_json::from_str(&json).unwrap();
        assert_eq!(back.rows, trace.rows);
        assert_eq!(back.total_cycles, trace.total_cycles);
    }
}
