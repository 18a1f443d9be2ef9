//! # Service Registry
//!
//! 싱글톤 서비스 인스턴스를 중앙에서 관리하는 레지스트리입니다.
//! 서비스들은 `inventory`를 통해 컴파일 타임에 자동 등록되고,
//! 애플리케이션 시작 시 `initialize_all()`이 한 번에 초기화합니다.
//!
//! ## 동작 방식
//!
//! 1. 각 서비스 모듈이 `inventory::submit!`으로 `ServiceRegistration` 제출
//! 2. `main`에서 `ServiceLocator::initialize_all()` 호출
//! 3. 등록된 생성자들이 순서대로 실행되어 Lazy 싱글톤을 예열(warm-up)
//! 4. 인프라 리소스(Database 등)는 `ServiceLocator::set`으로 직접 등록
//!
//! ```rust,ignore
//! inventory::submit! {
//!     ServiceRegistration {
//!         name: "CoreDiagnosisService",
//!         constructor: || { CoreDiagnosisService::instance(); },
//!     }
//! }
//! ```

use once_cell::sync::Lazy;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::core::errors::{AppError, AppResult};
use crate::utils::display_terminal;

/// 서비스 자동 등록 정보
///
/// `constructor`는 해당 서비스의 Lazy 싱글톤을 예열하는 역할만 합니다.
pub struct ServiceRegistration {
    /// 초기화 로그에 표시되는 서비스 이름
    pub name: &'static str,
    /// 싱글톤 인스턴스를 생성하는 함수
    pub constructor: fn(),
}

inventory::collect!(ServiceRegistration);

/// 타입 기반 서비스 로케이터
///
/// 인프라 리소스(Database 등)를 TypeId로 저장하고 조회합니다.
/// 분석 서비스들은 자체 Lazy 싱글톤을 사용하므로 여기에 저장하지 않습니다.
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(|| ServiceLocator {
    instances: RwLock::new(HashMap::new()),
});

impl ServiceLocator {
    /// 인스턴스를 레지스트리에 등록합니다.
    pub fn set<T: Any + Send + Sync>(instance: Arc<T>) {
        let mut instances = LOCATOR
            .instances
            .write()
            .expect("ServiceLocator lock poisoned");
        instances.insert(TypeId::of::<T>(), instance);
    }

    /// 등록된 인스턴스를 조회합니다. 미등록 시 패닉합니다.
    ///
    /// 시작 시퀀스에서 반드시 등록되는 인프라 리소스에만 사용하세요.
    pub fn get<T: Any + Send + Sync>() -> Arc<T> {
        Self::try_get::<T>().unwrap_or_else(|| {
            panic!(
                "ServiceLocator: {} 이(가) 등록되지 않았습니다",
                std::any::type_name::<T>()
            )
        })
    }

    /// 등록된 인스턴스를 조회합니다. 미등록 시 None을 반환합니다.
    pub fn try_get<T: Any + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR
            .instances
            .read()
            .expect("ServiceLocator lock poisoned");
        instances
            .get(&TypeId::of::<T>())
            .and_then(|any| any.clone().downcast::<T>().ok())
    }

    /// inventory에 제출된 서비스 등록 수를 반환합니다.
    pub fn registered_count() -> usize {
        inventory::iter::<ServiceRegistration>.into_iter().count()
    }

    /// inventory에 제출된 모든 서비스를 초기화합니다.
    pub async fn initialize_all() -> AppResult<()> {
        let registrations: Vec<&ServiceRegistration> =
            inventory::iter::<ServiceRegistration>.into_iter().collect();

        if registrations.is_empty() {
            return Err(AppError::InternalError(
                "등록된 서비스가 없습니다".to_string(),
            ));
        }

        display_terminal::print_step_start(2, "서비스 레지스트리 초기화");

        for registration in &registrations {
            (registration.constructor)();
            display_terminal::print_sub_task(registration.name, "OK");
        }

        display_terminal::print_step_complete(2, "서비스 등록 완료", registrations.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestResource {
        value: u32,
    }

    #[test]
    fn test_set_and_get() {
        ServiceLocator::set(Arc::new(TestResource { value: 42 }));

        let resource = ServiceLocator::get::<TestResource>();
        assert_eq!(resource.value, 42);
    }

    #[test]
    fn test_try_get_missing_returns_none() {
        struct NeverRegistered;
        assert!(ServiceLocator::try_get::<NeverRegistered>().is_none());
    }
}
