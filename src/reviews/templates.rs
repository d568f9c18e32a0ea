//! Review wording per species. `{name}` and `{tasks}` are placeholders.

use super::Species;

pub(super) fn weekly(species: Species) -> &'static [&'static str] {
    match species {
        Species::Dog => &[
            "A standout week for {name}. Commitment to the Good Boy protocol is unmatched, though the drool-to-task ratio remains high.",
            "{name} failed to catch the mailman again, but floor-vacuuming efficiency is at an all-time high.",
            "Manager note: {name} is easily motivated by cheese and defended the sofa from a very suspicious squirrel.",
        ],
        Species::Cat => &[
            "{name} completed tasks with the usual air of profound boredom. Gravity experiments were a full success.",
            "Performance was adequate, though {name} spent most of the week in a sunbeam and has requested a raise in tuna.",
            "The reviewer was hissed at during the appraisal. {name} is clearly overqualified.",
        ],
        Species::Goldfish => &[
            "An enigmatic week. {name} seems to have forgotten every finished task, yet remains remarkably calm.",
            "High marks for bubble production! {name} investigated the blue gravel department with extreme focus.",
        ],
        Species::Parrot => &[
            "The loudest week on record. {name} reproduced the fire alarm perfectly to get out of cleaning.",
            "Excellent communication skills. {name} spent the week lecturing the toaster.",
        ],
        Species::Lizard => &[
            "Incredible stillness. {name}'s push-up form at the morning stand-up was impeccable.",
            "Steady performance. {name} shed the old KPIs (and some skin) this week.",
        ],
        Species::Hamster => &[
            "{name} ran the wheel of achievement this week. Productivity: immeasurable. Wheel noise: deafening.",
            "{name} slept 23 hours a day and still outperformed the team in one-hour bursts.",
        ],
        Species::Rabbit => &[
            "Exceptional reflexes. {name} binky-hopped through every assignment this week.",
            "{name} filed a long complaint about snack variety. Work performance: solid.",
        ],
        Species::Snake => &[
            "Intimidatingly efficient. {name} swallowed the workload whole and is now digesting.",
            "{name} completed tasks with predatory precision. Colleagues report feeling watched.",
        ],
    }
}

pub(super) fn weekly_idle(species: Species) -> &'static [&'static str] {
    match species {
        Species::Dog => &[
            "{name} has gone rogue. Last seen chasing something invisible through the office.",
            "Investigation pending: {name} was too busy being a good boy to do any tasks.",
        ],
        Species::Cat => &[
            "{name} knocked every task off the desk. Literally. They are on the floor now.",
            "Nothing done by {name} this week. They are not sorry, and frankly, disappointed in us.",
        ],
        Species::Goldfish => &[
            "{name} completed zero tasks. Or possibly all of them, three times. Memory: inconclusive.",
        ],
        Species::Parrot => &[
            "{name} has learned the phrase 'Not it' and applies it liberally.",
        ],
        Species::Lizard => &[
            "{name} held perfect stillness all week. Zero tasks, infinite peace.",
        ],
        Species::Hamster => &[
            "All of {name}'s energy went into wheel optimisation. Tasks: forgotten.",
        ],
        Species::Rabbit => &[
            "{name} escaped the premises repeatedly this week. Tasks: ignored. Lettuce: located.",
        ],
        Species::Snake => &[
            "{name} is coiled in a productivity hibernation. ETA for tasks: unknown.",
        ],
    }
}

pub(super) fn monthly(species: Species) -> &'static [&'static str] {
    match species {
        Species::Dog => &[
            "{name} tackled {tasks} with characteristic enthusiasm. The drool budget exceeded projections.",
            "Loyalty in action: {name} completed {tasks} and requests head pats as compensation.",
        ],
        Species::Cat => &[
            "{name} deigned to complete {tasks}. Effort: debatable. Results: undeniable.",
            "Against all odds, {name} bothered with {tasks} and now demands premium treats.",
        ],
        Species::Goldfish => &[
            "{name} may have completed {tasks}. The timeline is mysterious and profound.",
        ],
        Species::Parrot => &[
            "{name} LOUDLY announced the completion of {tasks}. Three times. At maximum volume.",
        ],
        Species::Lizard => &[
            "While barely moving, {name} completed {tasks}. The method defies logic.",
        ],
        Species::Hamster => &[
            "{name} finished {tasks} while running several hundred miles on the wheel.",
        ],
        Species::Rabbit => &[
            "{name} binky-hopped through {tasks}. Escape attempts: three. Success: mixed.",
        ],
        Species::Snake => &[
            "{name} consumed a workload of {tasks} and will be digesting for three weeks.",
        ],
    }
}

pub(super) fn monthly_idle(species: Species) -> &'static [&'static str] {
    match species {
        Species::Dog => &["{name} submitted a blank report. Upon investigation, they were napping."],
        Species::Cat => &["{name}'s report arrived empty: a silent protest against our management style."],
        Species::Goldfish => &["{name} cannot recall completing any tasks. Or perhaps already forgot."],
        Species::Parrot => &["{name} screamed the entire monthly report. Content was unintelligible."],
        Species::Lizard => &["{name} was indistinguishable from the office decor all month."],
        Species::Hamster => &["The wheel never stopped spinning all month. Tasks: somehow still zero."],
        Species::Rabbit => &["{name} was preoccupied with lettuce acquisition this month."],
        Species::Snake => &["{name} entered a three-week digestive state. Tasks are on pause."],
    }
}
