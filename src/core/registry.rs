//! # Component Registry
//!
//! `singleton_macro`의 `#[service]` / `#[repository]`가 생성하는 코드가 기대하는
//! 싱글톤 의존성 주입 컨테이너입니다.
//!
//! - 인프라 컴포넌트(`Database`, `RedisClient`)는 `ServiceLocator::set()`으로 직접 등록
//! - 매크로가 붙은 컴포넌트는 `inventory`로 수집되어 첫 요청 시 생성
//! - `Arc<T>` 필드는 매크로가 `ServiceLocator::get::<T>()` 호출로 채움
//!
//! ```text
//! main.rs
//!  ├─ ServiceLocator::set(Arc<Database>)
//!  ├─ ServiceLocator::set(Arc<RedisClient>)
//!  └─ ServiceLocator::initialize_all()
//!       └─ SequenceRepository::instance()  ← db: Arc<Database> 자동 주입
//! ```
//!
//! 등록 이름 규칙: `#[repository(name = "sequence")]`는 `sequence_repository`로 등록되고,
//! 타입 이름 `SequenceRepository`에서 접미사를 뗀 `sequence`로 조회됩니다.

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use log::error;
use once_cell::sync::Lazy;

use crate::utils::display_terminal::{
    print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete,
    print_step_start, print_sub_task,
};

/// `#[service]` 매크로가 구현하는 공통 인터페이스
#[async_trait]
pub trait Service: Send + Sync {
    fn name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// `#[repository]` 매크로가 구현하는 공통 인터페이스
#[async_trait]
pub trait Repository: Send + Sync {
    fn name(&self) -> &str;

    /// 연결된 MongoDB 컬렉션 이름
    fn collection_name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// `#[service]`가 생성하는 등록 정보
pub struct ServiceRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// `#[repository]`가 생성하는 등록 정보
pub struct RepositoryRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<ServiceRegistration>()
        .map(|registration| (strip_registration_suffix(registration.name), registration))
        .collect();

    print_cache_initialized("Service", cache.len());
    cache
});

static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<RepositoryRegistration>()
        .map(|registration| (strip_registration_suffix(registration.name), registration))
        .collect();

    print_cache_initialized("Repository", cache.len());
    cache
});

/// `sequence_repository` → `sequence`
fn strip_registration_suffix(name: &str) -> String {
    name.strip_suffix("_service")
        .or_else(|| name.strip_suffix("_repository"))
        .unwrap_or(name)
        .to_string()
}

/// `merchant_order_backend::repositories::SequenceRepository` → `SequenceRepository`
fn short_type_name(type_name: &str) -> &str {
    type_name.rsplit("::").next().unwrap_or(type_name)
}

/// 싱글톤 의존성 주입 컨테이너
///
/// `TypeId`별로 하나의 인스턴스만 보관합니다. 초기화 중인 타입을 추적하여
/// 순환 의존성은 데드락 대신 즉시 패닉으로 드러냅니다.
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    initializing: RwLock<HashSet<TypeId>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    /// 등록된 인스턴스를 반환하고, 없으면 매크로 레지스트리에서 생성합니다.
    ///
    /// # Panics
    ///
    /// - 순환 의존성이 감지된 경우
    /// - 어떤 레지스트리에도 없는 타입을 요청한 경우
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if let Some(instance) = Self::cached::<T>() {
            return instance;
        }

        {
            let mut initializing = LOCATOR.initializing.write().unwrap();
            if !initializing.insert(type_id) {
                error!("❌ Circular dependency detected for type: {}", type_name);
                panic!("Circular dependency detected: {} is already being initialized", type_name);
            }
        }

        let result = std::panic::catch_unwind(Self::construct::<T>);

        LOCATOR.initializing.write().unwrap().remove(&type_id);

        match result {
            Ok(instance) => instance,
            Err(e) => {
                error!("Failed to create instance for {}: {:?}", type_name, e);
                panic!("Failed to create instance for {}", type_name);
            }
        }
    }

    /// 인스턴스 캐시에 있는 경우에만 반환합니다.
    pub fn try_get<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        Self::cached::<T>()
    }

    fn cached<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR.instances.read().unwrap();
        instances.get(&TypeId::of::<T>()).map(|instance| {
            instance
                .clone()
                .downcast::<T>()
                .expect("Type mismatch in ServiceLocator")
        })
    }

    fn construct<T: 'static + Send + Sync>() -> Arc<T> {
        let type_name = std::any::type_name::<T>();
        let short_name = short_type_name(type_name);

        let boxed = if let Some(entity) = short_name.strip_suffix("Repository") {
            let key = entity.to_lowercase();
            let registration = REPOSITORY_NAME_CACHE
                .get(&key)
                .unwrap_or_else(|| panic!("No repository found for entity: {}", key));
            (registration.constructor)()
        } else if let Some(entity) = short_name.strip_suffix("Service") {
            let key = entity.to_lowercase();
            let registration = SERVICE_NAME_CACHE
                .get(&key)
                .unwrap_or_else(|| panic!("No service found for entity: {}", key));
            (registration.constructor)()
        } else {
            panic!(
                "Component not found: {}. Register it with #[service]/#[repository] or ServiceLocator::set()",
                type_name
            );
        };

        let instance = match boxed.downcast::<Arc<T>>() {
            Ok(arc) => *arc,
            Err(_) => panic!("Type mismatch for component: {}", short_name),
        };

        let mut instances = LOCATOR.instances.write().unwrap();
        instances
            .entry(TypeId::of::<T>())
            .or_insert_with(|| instance.clone() as Arc<dyn Any + Send + Sync>)
            .clone()
            .downcast::<T>()
            .expect("Type mismatch in ServiceLocator")
    }

    /// 외부에서 생성한 인프라 컴포넌트를 등록합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = std::any::type_name::<T>();
        println!("📦 Registering: {}", short_type_name(type_name));

        let mut instances = LOCATOR.instances.write().unwrap();
        instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 수집된 모든 리포지토리와 서비스를 미리 생성합니다.
    ///
    /// 리포지토리를 먼저 생성하므로 서비스의 리포지토리 필드는 캐시에서 해결됩니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repositories: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        if !repositories.is_empty() {
            print_step_start(1, "Creating Repository instances");
            for registration in &repositories {
                print_sub_task(registration.name, "Creating...");
                let _instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }
            print_step_complete(1, "Repository instances created", repositories.len());
        }

        let services: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        if !services.is_empty() {
            print_step_start(2, "Creating Service instances");
            for registration in &services {
                print_sub_task(registration.name, "Creating...");
                let _instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }
            print_step_complete(2, "Service instances created", services.len());
        }

        print_final_summary(repositories.len(), services.len());
        Ok(())
    }
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);
