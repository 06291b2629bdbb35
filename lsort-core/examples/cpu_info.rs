use lsort_core::arch;

fn main() {
    // Detect CPU topology
    let cpu_info = arch::detect_cpu_topology();
    println!("Detected {} logical cores", cpu_info.logical_cores());

    if let Some(physical) = cpu_info.physical_cores() {
        println!("Detected {} physical cores", physical);
    } else {
        println!("Physical core count not available");
    }

    // Derive the parallel plan
    let plan = arch::plan_for_system();
    println!("\nDerived parallel plan: {:?}", plan);
    println!("Build/sort workers: {}", plan.workers());
    println!("Max spawn depth: {}", plan.max_spawn_depth());
    println!("Pins workers: {}", plan.pins_workers());
}
