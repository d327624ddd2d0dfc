use crate::chains::CyclePathExtractor;
use crate::core::{Analysis, Metadata, Package};
use crate::detector::CycleDetector;
use crate::graph::DependencyGraphBuilder;
use crate::progress::ProgressReporter;
use crate::view_filter::{View, ViewFilter};

/// Runs one batch of packages through graph building, cycle detection, view
/// filtering and chain extraction
#[derive(Debug, Clone)]
pub struct CycleAnalyzer {
    filter: ViewFilter,
    include_metadata: bool,
    cyclic_count: usize,
    anomalies: Vec<String>,
}

impl Default for CycleAnalyzer {
    fn default() -> Self {
        Self::new(View::default())
    }
}

impl CycleAnalyzer {
    pub fn new(view: View) -> Self {
        Self {
            filter: ViewFilter::new(view),
            include_metadata: true,
            cyclic_count: 0,
            anomalies: Vec::new(),
        }
    }

    /// Whether the result carries cycle chains
    pub fn with_metadata(mut self, include_metadata: bool) -> Self {
        self.include_metadata = include_metadata;
        self
    }

    pub fn view(&self) -> View {
        self.filter.view()
    }

    pub fn analyze(
        &mut self,
        mut packages: Vec<Package>,
        mut progress: Option<&mut ProgressReporter>,
    ) -> Analysis {
        if let Some(p) = progress.as_mut() {
            p.start_cycle_detection();
        }

        let graph = DependencyGraphBuilder::new().build(&packages);
        let mut detector = CycleDetector::new();
        detector.detect_cycles(&graph, &mut packages);

        self.cyclic_count = detector.cyclic_count();
        self.anomalies = detector.anomalies().to_vec();

        if let Some(p) = progress.as_ref() {
            p.finish_cycle_detection(self.cyclic_count);
        }

        let packages = self.filter.apply(packages);
        let metadata = self.include_metadata.then(|| Metadata {
            cycles: CyclePathExtractor::new().extract(&packages),
        });

        Analysis { packages, metadata }
    }

    /// Packages found on a cycle in the last run, before filtering
    pub fn cyclic_count(&self) -> usize {
        self.cyclic_count
    }

    /// Paths of cyclic packages the last run could not attribute to any
    /// import
    pub fn anomalies(&self) -> &[String] {
        &self.anomalies
    }
}
