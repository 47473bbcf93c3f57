#![allow(dead_code)]

//! Fixture machines shared by the integration suites

use machine_viz::{Machine, StateDef, StateNode, Transition};

/// Two states flipping on `toggle`, no guards or reducers
pub fn toggle() -> Machine {
    Machine::new("inactive")
        .state("inactive", StateNode::new().on("toggle", Transition::to("active")))
        .state("active", StateNode::new().on("toggle", Transition::to("inactive")))
}

/// Five-state turn loop with two guarded transitions
pub fn guards_rpg() -> Machine {
    Machine::new("chooseMove")
        .state(
            "chooseMove",
            StateNode::new()
                .on("next", Transition::to("healing").with_guard("amHurt"))
                .on("next", Transition::to("attacking")),
        )
        .state("attacking", StateNode::new().on("next", Transition::to("enemyTurn")))
        .state("healing", StateNode::new().on("next", Transition::to("enemyTurn")))
        .state(
            "enemyTurn",
            StateNode::new()
                .on("takeAttack", Transition::to("defeated").with_guard("strongEnough"))
                .on("next", Transition::to("chooseMove")),
        )
        .state("defeated", StateNode::new().final_state())
}

/// Login form: two self-transitions with reducers, one plain submit
pub fn reducers_login() -> Machine {
    Machine::new("idle")
        .state(
            "idle",
            StateNode::new()
                .on("login", Transition::to("idle").with_reducer("setLogin"))
                .on("password", Transition::to("idle").with_reducer("setPassword"))
                .on("submit", Transition::to("complete")),
        )
        .state("complete", StateNode::new().final_state())
}

/// Validation step with two ordered immediates, the first guarded
pub fn immediates_form() -> Machine {
    Machine::new("idle")
        .state("idle", StateNode::new().on("submit", Transition::to("validate")))
        .state(
            "validate",
            StateNode::new()
                .immediate(Transition::to("submission").with_guard("canSubmit"))
                .immediate(Transition::to("idle")),
        )
        .state("submission", StateNode::new())
}

/// Promise-invoking loader with `done`/`error` lifecycle transitions
pub fn promise_loader() -> Machine {
    Machine::new("idle")
        .state("idle", StateNode::new().on("load", Transition::to("loading")))
        .state(
            "loading",
            StateDef::invoke_promise(
                StateNode::new()
                    .on("done", Transition::to("idle").with_reducer("setUser"))
                    .on("error", Transition::to("error").with_reducer("setError"))
                    .on("abort", Transition::to("idle")),
            ),
        )
        .state("error", StateNode::new())
}

/// Traffic light whose yellow phase delegates to a nested wait/check machine
pub fn traffic_light() -> Machine {
    let yellow_phase = Machine::new("wait")
        .state(
            "wait",
            StateDef::invoke_promise(StateNode::new().on("done", Transition::to("check"))),
        )
        .state(
            "check",
            StateNode::new()
                .immediate(Transition::to("complete").with_guard("trafficIsClear"))
                .immediate(Transition::to("wait")),
        )
        .state("complete", StateNode::new().final_state());

    Machine::new("greenLight")
        .state("greenLight", StateNode::new().on("button", Transition::to("yellowLight")))
        .state(
            "yellowLight",
            StateDef::invoke_machine(
                yellow_phase,
                StateNode::new()
                    .on("done", Transition::to("redLight"))
                    .on("cancel", Transition::to("greenLight")),
            ),
        )
        .state(
            "redLight",
            StateDef::invoke_promise(StateNode::new().on("done", Transition::to("greenLight"))),
        )
}
