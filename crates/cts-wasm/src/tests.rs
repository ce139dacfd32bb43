//! Tests for the WASM solver bindings

#[cfg(test)]
mod tests {
    use crate::CtsSolver;

    fn enter(solver: &mut CtsSolver, top: &str, bottom: &str, operator: &str) {
        for c in top.chars() {
            assert!(solver.push_top(&c.to_string()));
        }
        for c in bottom.chars() {
            assert!(solver.push_bottom(&c.to_string()));
        }
        solver.set_operator(operator);
    }

    #[test]
    fn test_new_solver() {
        let solver = CtsSolver::new(6).unwrap();
        assert_eq!(solver.size(), 6);
        assert_eq!(solver.preset_sizes(), vec![3, 4, 5, 6]);
        assert_eq!(solver.forward_code(), None);
    }

    #[test]
    fn test_codes() {
        let mut solver = CtsSolver::new(4).unwrap();
        enter(&mut solver, "+▲●■", "▲■+●", "1324");
        assert_eq!(solver.forward_code().as_deref(), Some("3412"));
        assert_eq!(solver.inverse_code().as_deref(), Some("2143"));
        assert_eq!(solver.top(), "+ ▲ ● ■");
    }

    #[test]
    fn test_row_capacity_and_undo() {
        let mut solver = CtsSolver::new(3).unwrap();
        for s in ["●", "■", "▲"] {
            assert!(solver.push_top(s));
        }
        assert!(solver.is_top_full());
        assert!(!solver.push_top("●"));
        assert_eq!(solver.pop_top().as_deref(), Some("▲"));
        assert!(!solver.is_top_full());
        assert!(!solver.push_bottom(""));
    }

    #[test]
    fn test_operator_sanitized() {
        let mut solver = CtsSolver::new(4).unwrap();
        assert_eq!(solver.set_operator("1-3 2x4 5"), "1324");
        assert_eq!(solver.operator(), "1324");
    }

    #[test]
    fn test_set_size_clears_rows() {
        let mut solver = CtsSolver::new(4).unwrap();
        enter(&mut solver, "+▲●■", "▲■+●", "1324");
        assert!(solver.set_size(6));
        assert_eq!(solver.size(), 6);
        assert_eq!(solver.top(), "");
        assert_eq!(solver.operator(), "");
        assert!(!solver.set_size(9));
    }

    #[test]
    fn test_state_json_round_trip() {
        let mut solver = CtsSolver::with_alphabet("a b c").unwrap();
        enter(&mut solver, "cab", "bca", "231");
        solver.set_candidates("231");

        let json = solver.get_state_json();
        let mut restored = CtsSolver::new(3).unwrap();
        assert!(restored.load_state_json(&json));
        assert_eq!(restored.forward_code().as_deref(), Some("231"));
        assert!(!restored.load_state_json("not json"));
    }

    #[test]
    fn test_reset() {
        let mut solver = CtsSolver::new(4).unwrap();
        enter(&mut solver, "+▲●■", "▲■+●", "1324");
        solver.reset();
        assert_eq!(solver.top(), "");
        assert_eq!(solver.bottom(), "");
        assert_eq!(solver.forward_code(), None);
    }

    #[test]
    fn test_strict_policy() {
        let mut solver = CtsSolver::with_alphabet("a b c").unwrap();
        solver.set_strict(true);
        enter(&mut solver, "cab", "bca", "231");
        assert_eq!(solver.forward_code().as_deref(), Some("231"));

        solver.set_operator("223");
        assert_eq!(solver.forward_code(), None);
        assert_eq!(solver.inverse_code(), None);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod js_tests {
    use crate::CtsSolver;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_alphabet_array() {
        let solver = CtsSolver::new(6).unwrap();
        let alphabet = solver.alphabet();
        assert_eq!(alphabet.length(), 6);
        assert_eq!(alphabet.get(0).as_string().as_deref(), Some("%"));
    }

    #[wasm_bindgen_test]
    fn test_unknown_size_fails() {
        assert!(CtsSolver::new(8).is_err());
        assert!(CtsSolver::with_alphabet("a a").is_err());
    }

    #[wasm_bindgen_test]
    fn test_evaluate_object() {
        let mut solver = CtsSolver::new(4).unwrap();
        for c in "+▲●■".chars() {
            solver.push_top(&c.to_string());
        }
        for c in "▲■+●".chars() {
            solver.push_bottom(&c.to_string());
        }
        solver.set_operator("1324");
        solver.set_candidates("3412");

        let value = solver.evaluate().unwrap();
        let forward = js_sys::Reflect::get(&value, &"forward".into()).unwrap();
        assert_eq!(forward.as_string().as_deref(), Some("3412"));
    }
}
