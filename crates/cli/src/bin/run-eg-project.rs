use pengine_build_layout::Project;

fn main() {
    pengine_run::run(Project::EgProject);
}
