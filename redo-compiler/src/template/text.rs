/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Fixed line layouts of the two generated headers.
//!
//! The engine includes `models/systemModel.hpp` and calls
//! `model::defineEvents()`, `defineProcessors()`, `defineTasks()` and
//! `defineSegments()` before running the analysis; `scheduler<Time>` is
//! instantiated with the generated segment map and asked for a decision at
//! every scheduling point.

use super::Line::{Slot, Text};
use super::{Line, ModelSlot, SchedulerSlot};

pub(super) const SYSTEM_MODEL: &[Line<ModelSlot>] = &[
    Text("#ifndef SYSTEM_MODEL_HPP\n"),
    Text("#define SYSTEM_MODEL_HPP\n"),
    Text("\n"),
    Text("#include <vector>\n"),
    Text("#include \"../time.hpp\"\n"),
    Text("#include \"../interval.hpp\"\n"),
    Text("#include \"../task.hpp\"\n"),
    Text("#include \"../job.hpp\"\n"),
    Text("#include \"../processor.hpp\"\n"),
    Text("#include \"events.hpp\"\n"),
    Text("\n"),
    Text("namespace model {\n"),
    Slot(ModelSlot::TimeModel),
    Text("\tevents<time> systemEvents;\n"),
    Text("\tstd::vector<processor> processors;\n"),
    Text("\tstd::vector<task<time>> tasks;\n"),
    Text("\tstd::vector<job<time>> segments;\n"),
    Text("\n"),
    Text("\tinline void defineEvents() {\n"),
    Slot(ModelSlot::Events),
    Text("\t}\n"),
    Text("\n"),
    Text("\tinline void defineProcessors() {\n"),
    Slot(ModelSlot::Resources),
    Text("\t}\n"),
    Text("\n"),
    Text("\tinline void defineTasks() {\n"),
    Slot(ModelSlot::Tasks),
    Text("\t}\n"),
    Text("\n"),
    Text("\tinline void defineSegments() {\n"),
    Slot(ModelSlot::Jobs),
    Text("\t}\n"),
    Text("}\n"),
    Text("\n"),
    Text("#endif\n"),
];

pub(super) const SCHEDULER: &[Line<SchedulerSlot>] = &[
    Text("#ifndef SCHEDULER_HPP\n"),
    Text("#define SCHEDULER_HPP\n"),
    Text("\n"),
    Text("#include <vector>\n"),
    Text("#include <string>\n"),
    Text("#include <algorithm>\n"),
    Text("#include <optional>\n"),
    Text("#include <unordered_map>\n"),
    Text("#include \"job.hpp\"\n"),
    Text("#include \"queue.hpp\"\n"),
    Text("\n"),
    Text("template<class Time>\n"),
    Text("class scheduler {\n"),
    Text("\ttypedef std::unordered_map<jobID, job<Time>> segmentMap;\n"),
    Text("\tsegmentMap segmentsByID;\n"),
    Text("\n"),
    Text("\t// first released job of the named task\n"),
    Text("\tjobID getJobID(const std::string &taskName) const {\n"),
    Text("\t\tstd::optional<jobID> first;\n"),
    Text("\t\tfor (const auto &entry: segmentsByID) {\n"),
    Text("\t\t\tif (entry.second.getTaskName() != taskName)\n"),
    Text("\t\t\t\tcontinue;\n"),
    Text("\t\t\tif (!first || entry.second.getEarliestArrival() < segmentsByID.at(*first).getEarliestArrival())\n"),
    Text("\t\t\t\tfirst = entry.first;\n"),
    Text("\t\t}\n"),
    Text("\t\treturn first.value();\n"),
    Text("\t}\n"),
    Text("\n"),
    Text("\t// earliest absolute deadline of the named task that is not yet passed\n"),
    Text("\tTime getNextDeadline(const std::string &taskName, Time currentTime) const {\n"),
    Text("\t\tstd::optional<Time> next;\n"),
    Text("\t\tfor (const auto &entry: segmentsByID) {\n"),
    Text("\t\t\tconst auto &segment = entry.second;\n"),
    Text("\t\t\tif (segment.getTaskName() != taskName || segment.getDeadline() < currentTime)\n"),
    Text("\t\t\t\tcontinue;\n"),
    Text("\t\t\tif (!next || segment.getDeadline() < *next)\n"),
    Text("\t\t\t\tnext = segment.getDeadline();\n"),
    Text("\t\t}\n"),
    Text("\t\treturn next.value_or(currentTime);\n"),
    Text("\t}\n"),
    Text("\n"),
    Text("public:\n"),
    Text("\tscheduler() = default;\n"),
    Text("\n"),
    Text("\tscheduler(segmentMap segments) : segmentsByID(segments) { }\n"),
    Text("\n"),
    Text("\tstd::optional<jobID> callScheduler(queue<Time> &readyQueue, const std::unordered_map<std::string, unsigned int> &availableResources, Time currentTime) {\n"),
    Text("\t\t// if the queue is empty, return an empty optional\n"),
    Text("\t\tif (readyQueue.empty()) {\n"),
    Text("\t\t\treturn std::nullopt;\n"),
    Text("\t\t}\n"),
    Text("\n"),
    Text("\t\t// user defined scheduling algorithm\n"),
    Slot(SchedulerSlot::Body),
    Text("\n"),
    Text("\t\treturn std::nullopt;\n"),
    Text("\t}\n"),
    Text("};\n"),
    Text("\n"),
    Text("#endif\n"),
];
